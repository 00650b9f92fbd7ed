//! Test helper functions for API integration tests
//!
//! Builds the real router on top of in-memory repositories and drives it
//! with `tower::ServiceExt::oneshot`.

#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

use discography_api::api_router;
use discography_api::services::{DefaultAlbumService, DefaultSingerService};

use super::mocks::SharedStore;

/// Router with real services over the given in-memory store
pub fn test_app(store: &SharedStore) -> Router {
    let singer_service = DefaultSingerService::new(Arc::new(store.singer_repository()));
    let album_service = DefaultAlbumService::new(Arc::new(store.album_repository()));
    api_router(Arc::new(singer_service), Arc::new(album_service))
}

/// Response status plus the body, parsed as JSON when there is one
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Option<Value>,
}

impl TestResponse {
    pub fn json(&self) -> &Value {
        self.body.as_ref().expect("response had no body")
    }

    pub fn message(&self) -> &str {
        self.json()["message"]
            .as_str()
            .expect("error body has a string message")
    }
}

/// Send one request through the router, labelling any body as JSON
pub async fn send(app: Router, method: Method, uri: &str, body: Option<&str>) -> TestResponse {
    let mut builder = Request::builder().method(method).uri(uri);
    if body.is_some() {
        builder = builder.header(header::CONTENT_TYPE, "application/json");
    }
    dispatch(app, builder, body).await
}

async fn dispatch(
    app: Router,
    builder: axum::http::request::Builder,
    body: Option<&str>,
) -> TestResponse {
    let request = builder
        .body(body.map(|b| Body::from(b.to_string())).unwrap_or_else(Body::empty))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    let body = if bytes.is_empty() {
        None
    } else {
        Some(serde_json::from_slice(&bytes).expect("response body is JSON"))
    };

    TestResponse { status, body }
}

pub async fn get(app: Router, uri: &str) -> TestResponse {
    send(app, Method::GET, uri, None).await
}

pub async fn post(app: Router, uri: &str, body: &str) -> TestResponse {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn delete(app: Router, uri: &str) -> TestResponse {
    send(app, Method::DELETE, uri, None).await
}

/// POST a body with no `Content-Type` header, as `curl -d` style clients do
pub async fn post_without_content_type(app: Router, uri: &str, body: &str) -> TestResponse {
    let builder = Request::builder().method(Method::POST).uri(uri);
    dispatch(app, builder, Some(body)).await
}
