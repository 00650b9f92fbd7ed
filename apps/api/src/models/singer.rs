//! Singer model for Discography
//!
//! This module contains the database model for singers and the
//! validation applied before a singer is written.

use sqlx::FromRow;

use crate::error::{ApiError, ApiResult};

/// Maximum length, in characters, of singer names and album titles
pub const MAX_NAME_LENGTH: usize = 255;

/// Client-assigned singer identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, sqlx::Type)]
#[sqlx(transparent)]
pub struct SingerId(pub i32);

impl std::fmt::Display for SingerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for SingerId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

/// Singer record from the singers table
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Singer {
    /// Unique singer identifier
    pub id: SingerId,

    /// Singer name
    pub name: String,
}

impl Singer {
    pub fn new(id: impl Into<SingerId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    /// Check the singer can be persisted: the name must be non-empty and at
    /// most [`MAX_NAME_LENGTH`] characters.
    pub fn validate(&self) -> ApiResult<()> {
        validate_text("name", &self.name)
    }
}

/// Shared non-empty / maximum length rule for user-supplied text fields
pub(crate) fn validate_text(field: &'static str, value: &str) -> ApiResult<()> {
    if value.is_empty() {
        return Err(ApiError::ValidationError(format!("{} must not be empty", field)));
    }

    let length = value.chars().count();
    if length > MAX_NAME_LENGTH {
        return Err(ApiError::ValidationError(format!(
            "{} must be at most {} characters (got {})",
            field, MAX_NAME_LENGTH, length
        )));
    }

    Ok(())
}
