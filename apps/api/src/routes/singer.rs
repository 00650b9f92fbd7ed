//! Singer REST route handlers
//!
//! - `GET /singers` - List all singers ordered by id
//! - `GET /singers/:id` - Get a single singer
//! - `POST /singers` - Create a singer with a client-assigned id
//! - `DELETE /singers/:id` - Delete a singer that no album references

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

use super::{json_body, path_id};
use crate::error::{ApiError, ApiResult, StoreErrorKind};
use crate::models::{Singer, SingerId};
use crate::services::SingerService;

/// Shared application state for singer handlers
#[derive(Clone)]
pub struct SingerState {
    pub singer_service: Arc<dyn SingerService>,
}

impl SingerState {
    pub fn new(singer_service: Arc<dyn SingerService>) -> Self {
        Self { singer_service }
    }
}

/// Create singer router
pub fn singer_router(state: SingerState) -> Router {
    Router::new()
        .route("/", get(list_singers).post(create_singer))
        .route("/:id", get(get_singer).delete(delete_singer))
        .with_state(state)
}

// ========== Request/Response Types ==========

/// Singer view returned by every singer endpoint and embedded in albums
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SingerResponse {
    pub id: i32,
    pub name: String,
}

impl From<Singer> for SingerResponse {
    fn from(singer: Singer) -> Self {
        Self {
            id: singer.id.0,
            name: singer.name,
        }
    }
}

/// Create singer request body
#[derive(Debug, Deserialize)]
pub struct CreateSingerRequest {
    pub id: i32,
    pub name: String,
}

impl From<CreateSingerRequest> for Singer {
    fn from(req: CreateSingerRequest) -> Self {
        Singer::new(req.id, req.name)
    }
}

// ========== Route Handlers ==========

async fn list_singers(State(state): State<SingerState>) -> ApiResult<Json<Vec<SingerResponse>>> {
    let singers = state.singer_service.list().await?;
    Ok(Json(singers.into_iter().map(SingerResponse::from).collect()))
}

async fn get_singer(
    State(state): State<SingerState>,
    id: Result<Path<i32>, PathRejection>,
) -> ApiResult<Json<SingerResponse>> {
    let id = SingerId(path_id(id)?);
    let singer = state.singer_service.get(id).await?;
    Ok(Json(singer.into()))
}

/// # Response
/// - 201 Created: the singer as stored
/// - 400 Bad Request: malformed body or invalid name
/// - 409 Conflict: a singer with this id already exists
async fn create_singer(
    State(state): State<SingerState>,
    body: Bytes,
) -> ApiResult<impl IntoResponse> {
    let singer = Singer::from(json_body::<CreateSingerRequest>(&body)?);

    state
        .singer_service
        .create(&singer)
        .await
        .map_err(|err| {
            err.map_store_error(|kind| match kind {
                StoreErrorKind::UniqueViolation => Some(ApiError::conflict("singer", singer.id)),
                _ => None,
            })
        })?;

    tracing::debug!(singer_id = %singer.id, "Singer created");
    Ok((StatusCode::CREATED, Json(SingerResponse::from(singer))))
}

/// # Response
/// - 204 No Content: deleted
/// - 404 Not Found: no singer with this id
/// - 409 Conflict: albums still reference the singer
async fn delete_singer(
    State(state): State<SingerState>,
    id: Result<Path<i32>, PathRejection>,
) -> ApiResult<StatusCode> {
    let id = SingerId(path_id(id)?);

    state.singer_service.delete(id).await.map_err(|err| {
        err.map_store_error(|kind| match kind {
            StoreErrorKind::ForeignKeyViolation => Some(ApiError::ReferenceConflict(format!(
                "cannot delete singer {}: related albums exist",
                id
            ))),
            _ => None,
        })
    })?;

    tracing::debug!(singer_id = %id, "Singer deleted");
    Ok(StatusCode::NO_CONTENT)
}
