//! Album REST route handlers
//!
//! - `GET /albums` - List all albums with their singer embedded
//! - `GET /albums/:id` - Get a single album with its singer embedded
//! - `POST /albums` - Create an album for an existing singer
//! - `DELETE /albums/:id` - Delete an album

use axum::{
    body::Bytes,
    extract::{rejection::PathRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::singer::SingerResponse;
use super::{json_body, path_id};
use crate::error::{ApiError, ApiResult, StoreErrorKind};
use crate::models::{Album, AlbumId};
use crate::services::AlbumService;

/// Shared application state for album handlers
#[derive(Clone)]
pub struct AlbumState {
    pub album_service: Arc<dyn AlbumService>,
}

impl AlbumState {
    pub fn new(album_service: Arc<dyn AlbumService>) -> Self {
        Self { album_service }
    }
}

/// Create album router
pub fn album_router(state: AlbumState) -> Router {
    Router::new()
        .route("/", get(list_albums).post(create_album))
        .route("/:id", get(get_album).delete(delete_album))
        .with_state(state)
}

// ========== Request/Response Types ==========

/// Album read view with the singer embedded
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlbumResponse {
    pub id: i32,
    pub title: String,
    /// Always present for albums read from the store
    pub singer: Option<SingerResponse>,
}

impl From<Album> for AlbumResponse {
    fn from(album: Album) -> Self {
        Self {
            id: album.id.0,
            title: album.title,
            singer: album.singer.map(SingerResponse::from),
        }
    }
}

/// Create album request body
#[derive(Debug, Deserialize)]
pub struct CreateAlbumRequest {
    pub id: i32,
    pub title: String,
    pub singer_id: i32,
}

impl From<CreateAlbumRequest> for Album {
    fn from(req: CreateAlbumRequest) -> Self {
        Album::new(req.id, req.title, req.singer_id)
    }
}

/// Create album response, echoing the stored reference instead of a view
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateAlbumResponse {
    pub id: i32,
    pub title: String,
    pub singer_id: i32,
}

impl From<Album> for CreateAlbumResponse {
    fn from(album: Album) -> Self {
        Self {
            id: album.id.0,
            title: album.title,
            singer_id: album.singer_id.0,
        }
    }
}

// ========== Route Handlers ==========

async fn list_albums(State(state): State<AlbumState>) -> ApiResult<Json<Vec<AlbumResponse>>> {
    let albums = state.album_service.list().await?;
    Ok(Json(albums.into_iter().map(AlbumResponse::from).collect()))
}

async fn get_album(
    State(state): State<AlbumState>,
    id: Result<Path<i32>, PathRejection>,
) -> ApiResult<Json<AlbumResponse>> {
    let id = AlbumId(path_id(id)?);
    let album = state.album_service.get(id).await?;
    Ok(Json(album.into()))
}

/// # Response
/// - 201 Created: `{id, title, singer_id}`
/// - 400 Bad Request: malformed body or invalid title
/// - 409 Conflict: duplicate album id
/// - 500 Internal Server Error: any other store failure, including an
///   unknown singer
async fn create_album(
    State(state): State<AlbumState>,
    body: Bytes,
) -> ApiResult<impl IntoResponse> {
    let album = Album::from(json_body::<CreateAlbumRequest>(&body)?);

    state.album_service.create(&album).await.map_err(|err| {
        err.map_store_error(|kind| match kind {
            StoreErrorKind::UniqueViolation => Some(ApiError::conflict("album", album.id)),
            _ => None,
        })
    })?;

    tracing::debug!(album_id = %album.id, singer_id = %album.singer_id, "Album created");
    Ok((StatusCode::CREATED, Json(CreateAlbumResponse::from(album))))
}

async fn delete_album(
    State(state): State<AlbumState>,
    id: Result<Path<i32>, PathRejection>,
) -> ApiResult<StatusCode> {
    let id = AlbumId(path_id(id)?);
    state.album_service.delete(id).await?;

    tracing::debug!(album_id = %id, "Album deleted");
    Ok(StatusCode::NO_CONTENT)
}
