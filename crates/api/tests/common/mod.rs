#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use ceral_api::config::ServerConfig;
use ceral_api::router::build_app_router;
use ceral_api::state::AppState;
use ceral_db::memory::MemoryProjectStore;
use ceral_media::memory::MemoryBlobStore;

pub const MEDIA_URL: &str = "http://localhost:3000/media";

const BOUNDARY: &str = "ceral-test-boundary";

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        store_timeout_secs: 5,
        max_upload_bytes: 1024 * 1024,
        purge_media_on_delete: false,
    }
}

/// In-memory backends behind a test app, for seeding and inspection.
pub struct TestBackends {
    pub store: Arc<MemoryProjectStore>,
    pub blobs: Arc<MemoryBlobStore>,
}

/// Build the full application router over in-memory stores.
pub fn build_test_app() -> (Router, TestBackends) {
    build_test_app_with(test_config())
}

pub fn build_test_app_with(config: ServerConfig) -> (Router, TestBackends) {
    build_test_app_over(config, MemoryBlobStore::new(MEDIA_URL), Duration::from_secs(5))
}

/// Build the app over a pre-configured blob store (delays, failures) and a
/// custom per-upload bound.
pub fn build_test_app_over(
    config: ServerConfig,
    blobs: MemoryBlobStore,
    upload_timeout: Duration,
) -> (Router, TestBackends) {
    let store = Arc::new(MemoryProjectStore::new());
    let blobs = Arc::new(blobs);
    let state = AppState::new(store.clone(), blobs.clone(), config, upload_timeout);
    (build_app_router(state, None), TestBackends { store, blobs })
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, Body::empty(), None).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, Body::empty(), None).await
}

pub async fn send_form(app: Router, method: Method, uri: &str, form: MultipartForm) -> Response<Body> {
    let content_type = form.content_type();
    send(app, method, uri, Body::from(form.finish()), Some(content_type)).await
}

async fn send(
    app: Router,
    method: Method,
    uri: &str,
    body: Body,
    content_type: Option<String>,
) -> Response<Body> {
    let mut request = Request::builder().method(method).uri(uri);
    if let Some(content_type) = content_type {
        request = request.header("content-type", content_type);
    }
    app.oneshot(request.body(body).unwrap()).await.unwrap()
}

/// Minimal `multipart/form-data` body builder.
#[derive(Default)]
pub struct MultipartForm {
    body: Vec<u8>,
}

impl MultipartForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// A complete, valid project submission without files.
    pub fn project(title: &str, category: &str, featured: bool) -> Self {
        Self::new()
            .text("title", title)
            .text("description", "Peyzaj düzenlemesi")
            .text("location", "Ankara")
            .text("year", "2023")
            .text("type", category)
            .text("isFeatured", if featured { "true" } else { "false" })
    }

    pub fn text(mut self, name: &str, value: &str) -> Self {
        self.body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            )
            .as_bytes(),
        );
        self
    }

    pub fn file(mut self, name: &str, file_name: &str, content_type: &str, data: &[u8]) -> Self {
        self.body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"; filename=\"{file_name}\"\r\nContent-Type: {content_type}\r\n\r\n"
            )
            .as_bytes(),
        );
        self.body.extend_from_slice(data);
        self.body.extend_from_slice(b"\r\n");
        self
    }

    pub fn content_type(&self) -> String {
        format!("multipart/form-data; boundary={BOUNDARY}")
    }

    pub fn finish(mut self) -> Vec<u8> {
        self.body
            .extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
        self.body
    }
}
