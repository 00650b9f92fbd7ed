//! Singer repository for centralized database operations
//!
//! This module provides all singer-related database operations in a single
//! location, following the repository pattern.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::error::{ApiError, ApiResult};
use crate::models::{Singer, SingerId};

/// Persistence operations for singers
///
/// `add` and `delete_by_id` return the raw store error on constraint
/// violations; interpreting them is left to the caller.
#[async_trait]
pub trait SingerRepository: Send + Sync {
    /// All singers, ordered by id ascending
    async fn list_all(&self) -> ApiResult<Vec<Singer>>;

    /// Returns `ApiError::NotFound` if no singer has this id
    async fn get_by_id(&self, id: SingerId) -> ApiResult<Singer>;

    async fn add(&self, singer: &Singer) -> ApiResult<()>;

    /// Returns `ApiError::NotFound` if no row was deleted
    async fn delete_by_id(&self, id: SingerId) -> ApiResult<()>;
}

/// PostgreSQL-backed singer repository
#[derive(Clone)]
pub struct PgSingerRepository {
    pool: PgPool,
}

impl PgSingerRepository {
    /// Create a new PgSingerRepository instance
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SingerRepository for PgSingerRepository {
    async fn list_all(&self) -> ApiResult<Vec<Singer>> {
        let singers = sqlx::query_as::<_, Singer>("SELECT id, name FROM singers ORDER BY id ASC")
            .fetch_all(&self.pool)
            .await?;
        Ok(singers)
    }

    async fn get_by_id(&self, id: SingerId) -> ApiResult<Singer> {
        sqlx::query_as::<_, Singer>("SELECT id, name FROM singers WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| ApiError::not_found("singer", id))
    }

    async fn add(&self, singer: &Singer) -> ApiResult<()> {
        sqlx::query("INSERT INTO singers (id, name) VALUES ($1, $2)")
            .bind(singer.id)
            .bind(&singer.name)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn delete_by_id(&self, id: SingerId) -> ApiResult<()> {
        let result = sqlx::query("DELETE FROM singers WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(ApiError::not_found("singer", id));
        }
        Ok(())
    }
}
