//! HTTP route handlers for the Discography API
//!
//! This module contains all REST endpoint handlers:
//! - Singer endpoints
//! - Album endpoints
//! - Health check endpoints

pub mod album;
pub mod health;
pub mod singer;

pub use album::{album_router, AlbumState};
pub use health::{health_router, HealthState};
pub use singer::{singer_router, SingerState};

use axum::{
    body::Bytes,
    extract::{rejection::PathRejection, Path},
    Router,
};
use serde::de::DeserializeOwned;
use std::sync::Arc;

use crate::error::{ApiError, ApiResult};
use crate::services::{AlbumService, SingerService};

/// Build the singer and album routes on top of the given services
pub fn api_router(
    singer_service: Arc<dyn SingerService>,
    album_service: Arc<dyn AlbumService>,
) -> Router {
    Router::new()
        .nest("/singers", singer_router(SingerState::new(singer_service)))
        .nest("/albums", album_router(AlbumState::new(album_service)))
}

/// Unwrap an integer path id, turning any rejection into a 400
pub(crate) fn path_id(id: Result<Path<i32>, PathRejection>) -> ApiResult<i32> {
    id.map(|Path(id)| id)
        .map_err(|rejection| ApiError::InvalidPathParam(rejection.body_text()))
}

/// Decode a JSON request body, turning syntax and shape errors into a 400
///
/// The `Content-Type` header is not inspected.
pub(crate) fn json_body<T: DeserializeOwned>(body: &Bytes) -> ApiResult<T> {
    serde_json::from_slice(body).map_err(|err| ApiError::InvalidBody(err.to_string()))
}
