//! Album repository for centralized database operations
//!
//! Reads always inner-join the singers table so each album carries the
//! singer's current name. An album whose singer row is gone is therefore
//! omitted from results rather than returned without a singer.

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};

use crate::error::{ApiError, ApiResult};
use crate::models::{Album, AlbumId, Singer, SingerId};

/// SELECT list shared by album reads; pairs with [`AlbumWithSingerRow`]
const ALBUM_WITH_SINGER_SQL: &str = r#"
    SELECT a.id, a.title, a.singer_id, s.name AS singer_name
    FROM albums a
    JOIN singers s ON a.singer_id = s.id
"#;

/// Persistence operations for albums
#[async_trait]
pub trait AlbumRepository: Send + Sync {
    /// All albums with their singer, ordered by album id ascending
    async fn list_all(&self) -> ApiResult<Vec<Album>>;

    /// Returns `ApiError::NotFound` if no album has this id
    async fn get_by_id(&self, id: AlbumId) -> ApiResult<Album>;

    async fn add(&self, album: &Album) -> ApiResult<()>;

    /// Returns `ApiError::NotFound` if no row was deleted
    async fn delete_by_id(&self, id: AlbumId) -> ApiResult<()>;
}

#[derive(Debug, FromRow)]
struct AlbumWithSingerRow {
    id: AlbumId,
    title: String,
    singer_id: SingerId,
    singer_name: String,
}

impl From<AlbumWithSingerRow> for Album {
    fn from(row: AlbumWithSingerRow) -> Self {
        Album::new(row.id, row.title, row.singer_id)
            .with_singer(Singer::new(row.singer_id, row.singer_name))
    }
}

/// PostgreSQL-backed album repository
#[derive(Clone)]
pub struct PgAlbumRepository {
    pool: PgPool,
}

impl PgAlbumRepository {
    /// Create a new PgAlbumRepository instance
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AlbumRepository for PgAlbumRepository {
    async fn list_all(&self) -> ApiResult<Vec<Album>> {
        let sql = format!("{} ORDER BY a.id ASC", ALBUM_WITH_SINGER_SQL);
        let rows = sqlx::query_as::<_, AlbumWithSingerRow>(&sql)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(Album::from).collect())
    }

    async fn get_by_id(&self, id: AlbumId) -> ApiResult<Album> {
        let sql = format!("{} WHERE a.id = $1", ALBUM_WITH_SINGER_SQL);
        sqlx::query_as::<_, AlbumWithSingerRow>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .map(Album::from)
            .ok_or_else(|| ApiError::not_found("album", id))
    }

    async fn add(&self, album: &Album) -> ApiResult<()> {
        sqlx::query("INSERT INTO albums (id, title, singer_id) VALUES ($1, $2, $3)")
            .bind(album.id)
            .bind(&album.title)
            .bind(album.singer_id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn delete_by_id(&self, id: AlbumId) -> ApiResult<()> {
        let result = sqlx::query("DELETE FROM albums WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(ApiError::not_found("album", id));
        }
        Ok(())
    }
}
