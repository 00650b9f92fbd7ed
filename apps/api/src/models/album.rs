//! Album model for Discography
//!
//! Albums always belong to a singer. The embedded `singer` view is only
//! filled on read paths, where it is joined from the singers table.

use super::singer::{validate_text, Singer, SingerId};
use crate::error::ApiResult;

/// Client-assigned album identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, sqlx::Type)]
#[sqlx(transparent)]
pub struct AlbumId(pub i32);

impl std::fmt::Display for AlbumId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for AlbumId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

/// Album record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Album {
    /// Unique album identifier
    pub id: AlbumId,

    /// Album title
    pub title: String,

    /// Singer who released this album
    pub singer_id: SingerId,

    /// Current singer row, present on read paths only
    pub singer: Option<Singer>,
}

impl Album {
    pub fn new(
        id: impl Into<AlbumId>,
        title: impl Into<String>,
        singer_id: impl Into<SingerId>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            singer_id: singer_id.into(),
            singer: None,
        }
    }

    /// Attach the joined singer view
    pub fn with_singer(mut self, singer: Singer) -> Self {
        self.singer = Some(singer);
        self
    }

    /// Check the album can be persisted: the title must be non-empty and at
    /// most 255 characters. The singer reference is enforced by the store.
    pub fn validate(&self) -> ApiResult<()> {
        validate_text("title", &self.title)
    }
}
