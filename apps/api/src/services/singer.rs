//! Singer use-case service
//!
//! Validates singers before they are written and otherwise delegates to the
//! repository. Repository errors are propagated unchanged.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::ApiResult;
use crate::models::{Singer, SingerId};
use crate::repositories::SingerRepository;

/// Singer operations exposed to the route layer
#[async_trait]
pub trait SingerService: Send + Sync {
    async fn list(&self) -> ApiResult<Vec<Singer>>;

    async fn get(&self, id: SingerId) -> ApiResult<Singer>;

    /// Fails with `ApiError::ValidationError` before touching the store if
    /// the singer is invalid
    async fn create(&self, singer: &Singer) -> ApiResult<()>;

    async fn delete(&self, id: SingerId) -> ApiResult<()>;
}

/// Singer service backed by a [`SingerRepository`]
#[derive(Clone)]
pub struct DefaultSingerService {
    repository: Arc<dyn SingerRepository>,
}

impl DefaultSingerService {
    pub fn new(repository: Arc<dyn SingerRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl SingerService for DefaultSingerService {
    async fn list(&self) -> ApiResult<Vec<Singer>> {
        self.repository.list_all().await
    }

    async fn get(&self, id: SingerId) -> ApiResult<Singer> {
        self.repository.get_by_id(id).await
    }

    async fn create(&self, singer: &Singer) -> ApiResult<()> {
        singer.validate()?;
        self.repository.add(singer).await
    }

    async fn delete(&self, id: SingerId) -> ApiResult<()> {
        self.repository.delete_by_id(id).await
    }
}
