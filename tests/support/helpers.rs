// tests/support/helpers.rs
use std::sync::Arc;

use super::mocks::{FailingArticleRepository, InMemoryArticleRepository};
use axum::body::{self, Body};
use axum::http::{Request, StatusCode, header::CONTENT_TYPE};
use serde_json::Value;

use kiji::application::services::ApplicationServices;
use kiji::domain::article::{ArticleReadRepository, ArticleWriteRepository};
use kiji::presentation::http::{routes::build_router, state::HttpState};

pub fn make_test_router() -> axum::Router {
    router_for(Arc::new(InMemoryArticleRepository::new()))
}

pub fn make_seeded_router(entries: &[(&str, &str)]) -> axum::Router {
    router_for(Arc::new(InMemoryArticleRepository::seeded(entries)))
}

pub fn make_failing_router() -> axum::Router {
    let repo = Arc::new(FailingArticleRepository);
    let write_repo: Arc<dyn ArticleWriteRepository> = repo.clone();
    let read_repo: Arc<dyn ArticleReadRepository> = repo;
    build_with(write_repo, read_repo)
}

fn router_for(repo: Arc<InMemoryArticleRepository>) -> axum::Router {
    let write_repo: Arc<dyn ArticleWriteRepository> = repo.clone();
    let read_repo: Arc<dyn ArticleReadRepository> = repo;
    build_with(write_repo, read_repo)
}

fn build_with(
    write_repo: Arc<dyn ArticleWriteRepository>,
    read_repo: Arc<dyn ArticleReadRepository>,
) -> axum::Router {
    let services = Arc::new(ApplicationServices::new(write_repo, read_repo));
    build_router(HttpState { services })
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn json_request(method: &str, uri: &str, payload: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap()
}

/// Reads the response body and parses it as JSON.
pub async fn read_json(resp: axum::response::Response) -> Value {
    let body_bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body_bytes).expect("expected valid json body")
}

/// Assert that a response is an ErrorBody JSON with the expected status and
/// error string, and a non-empty message.
pub async fn assert_error_response(
    resp: axum::response::Response,
    expected_status: StatusCode,
    expected_error: &str,
) {
    assert_eq!(resp.status(), expected_status);
    let (parts, body_stream) = resp.into_parts();
    let body_bytes = body::to_bytes(body_stream, 1024 * 1024)
        .await
        .expect("read body");
    let ct = parts
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert!(
        ct.starts_with("application/json"),
        "unexpected content-type: {ct}"
    );
    let json: Value =
        serde_json::from_slice(&body_bytes).expect("expected valid json body for error");
    let err_field = json.get("error").and_then(|v| v.as_str()).unwrap_or("");
    let msg_field = json.get("message").and_then(|v| v.as_str()).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field");
    assert!(
        !msg_field.is_empty(),
        "expected non-empty message field in error body"
    );
}
