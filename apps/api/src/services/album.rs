//! Album use-case service

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::ApiResult;
use crate::models::{Album, AlbumId};
use crate::repositories::AlbumRepository;

/// Album operations exposed to the route layer
#[async_trait]
pub trait AlbumService: Send + Sync {
    async fn list(&self) -> ApiResult<Vec<Album>>;

    async fn get(&self, id: AlbumId) -> ApiResult<Album>;

    /// Fails with `ApiError::ValidationError` before touching the store if
    /// the album is invalid. Whether the singer exists is left to the store.
    async fn create(&self, album: &Album) -> ApiResult<()>;

    async fn delete(&self, id: AlbumId) -> ApiResult<()>;
}

/// Album service backed by an [`AlbumRepository`]
#[derive(Clone)]
pub struct DefaultAlbumService {
    repository: Arc<dyn AlbumRepository>,
}

impl DefaultAlbumService {
    pub fn new(repository: Arc<dyn AlbumRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl AlbumService for DefaultAlbumService {
    async fn list(&self) -> ApiResult<Vec<Album>> {
        self.repository.list_all().await
    }

    async fn get(&self, id: AlbumId) -> ApiResult<Album> {
        self.repository.get_by_id(id).await
    }

    async fn create(&self, album: &Album) -> ApiResult<()> {
        album.validate()?;
        self.repository.add(album).await
    }

    async fn delete(&self, id: AlbumId) -> ApiResult<()> {
        self.repository.delete_by_id(id).await
    }
}
