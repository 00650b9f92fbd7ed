//! In-memory repositories for route integration tests
//!
//! Both repositories share one [`InMemoryStore`] and reproduce the store
//! constraints the API relies on: primary keys on both tables and the
//! albums → singers foreign key. Violations are reported as sqlx database
//! errors, the same way the PostgreSQL driver reports them.

#![allow(dead_code)]

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use sqlx::error::{DatabaseError, ErrorKind};
use tokio::sync::RwLock;

use discography_api::error::{ApiError, ApiResult};
use discography_api::models::{Album, AlbumId, Singer, SingerId};
use discography_api::repositories::{AlbumRepository, SingerRepository};

/// Constraint violation reported by the in-memory store
#[derive(Debug)]
pub struct ConstraintViolation {
    kind: Violation,
    constraint: &'static str,
}

#[derive(Debug, Clone, Copy)]
enum Violation {
    Unique,
    ForeignKey,
}

impl fmt::Display for ConstraintViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (constraint {})", self.message(), self.constraint)
    }
}

impl std::error::Error for ConstraintViolation {}

impl DatabaseError for ConstraintViolation {
    fn message(&self) -> &str {
        match self.kind {
            Violation::Unique => "duplicate key value violates unique constraint",
            Violation::ForeignKey => "violates foreign key constraint",
        }
    }

    fn code(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Borrowed(match self.kind {
            Violation::Unique => "23505",
            Violation::ForeignKey => "23503",
        }))
    }

    fn as_error(&self) -> &(dyn std::error::Error + Send + Sync + 'static) {
        self
    }

    fn as_error_mut(&mut self) -> &mut (dyn std::error::Error + Send + Sync + 'static) {
        self
    }

    fn into_error(self: Box<Self>) -> Box<dyn std::error::Error + Send + Sync + 'static> {
        self
    }

    fn constraint(&self) -> Option<&str> {
        Some(self.constraint)
    }

    fn kind(&self) -> ErrorKind {
        match self.kind {
            Violation::Unique => ErrorKind::UniqueViolation,
            Violation::ForeignKey => ErrorKind::ForeignKeyViolation,
        }
    }
}

fn violation(kind: Violation, constraint: &'static str) -> ApiError {
    ApiError::from(sqlx::Error::Database(Box::new(ConstraintViolation {
        kind,
        constraint,
    })))
}

/// Tables shared by the in-memory repositories
#[derive(Debug, Default)]
pub struct InMemoryStore {
    singers: BTreeMap<SingerId, String>,
    albums: BTreeMap<AlbumId, (String, SingerId)>,
}

/// Handle to a shared in-memory store
#[derive(Clone, Default)]
pub struct SharedStore(Arc<RwLock<InMemoryStore>>);

impl SharedStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn tables(&self) -> &RwLock<InMemoryStore> {
        &self.0
    }

    pub async fn insert_singer(&self, id: i32, name: &str) {
        self.0
            .write()
            .await
            .singers
            .insert(SingerId(id), name.to_string());
    }

    pub async fn insert_album(&self, id: i32, title: &str, singer_id: i32) {
        self.0
            .write()
            .await
            .albums
            .insert(AlbumId(id), (title.to_string(), SingerId(singer_id)));
    }

    pub async fn rename_singer(&self, id: i32, name: &str) {
        if let Some(existing) = self.0.write().await.singers.get_mut(&SingerId(id)) {
            *existing = name.to_string();
        }
    }

    pub async fn singer_count(&self) -> usize {
        self.0.read().await.singers.len()
    }

    pub async fn album_count(&self) -> usize {
        self.0.read().await.albums.len()
    }

    pub async fn singer_name(&self, id: i32) -> Option<String> {
        self.0.read().await.singers.get(&SingerId(id)).cloned()
    }

    pub fn singer_repository(&self) -> InMemorySingerRepository {
        InMemorySingerRepository(self.clone())
    }

    pub fn album_repository(&self) -> InMemoryAlbumRepository {
        InMemoryAlbumRepository(self.clone())
    }
}

pub struct InMemorySingerRepository(SharedStore);

#[async_trait]
impl SingerRepository for InMemorySingerRepository {
    async fn list_all(&self) -> ApiResult<Vec<Singer>> {
        let store = self.0.tables().read().await;
        Ok(store
            .singers
            .iter()
            .map(|(id, name)| Singer::new(*id, name.clone()))
            .collect())
    }

    async fn get_by_id(&self, id: SingerId) -> ApiResult<Singer> {
        let store = self.0.tables().read().await;
        store
            .singers
            .get(&id)
            .map(|name| Singer::new(id, name.clone()))
            .ok_or_else(|| ApiError::not_found("singer", id))
    }

    async fn add(&self, singer: &Singer) -> ApiResult<()> {
        let mut store = self.0.tables().write().await;
        if store.singers.contains_key(&singer.id) {
            return Err(violation(Violation::Unique, "singers_pkey"));
        }
        store.singers.insert(singer.id, singer.name.clone());
        Ok(())
    }

    async fn delete_by_id(&self, id: SingerId) -> ApiResult<()> {
        let mut store = self.0.tables().write().await;
        if store.albums.values().any(|(_, singer_id)| *singer_id == id) {
            return Err(violation(Violation::ForeignKey, "albums_singer_id_fkey"));
        }
        store
            .singers
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| ApiError::not_found("singer", id))
    }
}

pub struct InMemoryAlbumRepository(SharedStore);

impl InMemoryStore {
    fn joined(&self, id: AlbumId, title: &str, singer_id: SingerId) -> Option<Album> {
        self.singers.get(&singer_id).map(|name| {
            Album::new(id, title, singer_id).with_singer(Singer::new(singer_id, name.clone()))
        })
    }
}

#[async_trait]
impl AlbumRepository for InMemoryAlbumRepository {
    async fn list_all(&self) -> ApiResult<Vec<Album>> {
        let store = self.0.tables().read().await;
        Ok(store
            .albums
            .iter()
            .filter_map(|(id, (title, singer_id))| store.joined(*id, title, *singer_id))
            .collect())
    }

    async fn get_by_id(&self, id: AlbumId) -> ApiResult<Album> {
        let store = self.0.tables().read().await;
        store
            .albums
            .get(&id)
            .and_then(|(title, singer_id)| store.joined(id, title, *singer_id))
            .ok_or_else(|| ApiError::not_found("album", id))
    }

    async fn add(&self, album: &Album) -> ApiResult<()> {
        let mut store = self.0.tables().write().await;
        if store.albums.contains_key(&album.id) {
            return Err(violation(Violation::Unique, "albums_pkey"));
        }
        if !store.singers.contains_key(&album.singer_id) {
            return Err(violation(Violation::ForeignKey, "albums_singer_id_fkey"));
        }
        store
            .albums
            .insert(album.id, (album.title.clone(), album.singer_id));
        Ok(())
    }

    async fn delete_by_id(&self, id: AlbumId) -> ApiResult<()> {
        let mut store = self.0.tables().write().await;
        store
            .albums
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| ApiError::not_found("album", id))
    }
}
