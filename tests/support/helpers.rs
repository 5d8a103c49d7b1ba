// tests/support/helpers.rs
use std::sync::Arc;

use super::mocks;
use axum::body::{self, Body};
use axum::http::{Method, Request, StatusCode, header::CONTENT_TYPE};
use axum::response::Response;
use serde_json::Value;
use tower::util::ServiceExt as _;

use article_service::application::ports::{time::Clock, util::IdGenerator};
use article_service::application::services::{ApplicationServices, ArticleUsecase};
use article_service::domain::article::{ArticleReadRepository, ArticleWriteRepository};
use article_service::infrastructure::{
    database, repositories::SqliteArticleRepository, time::SystemClock, util::UuidIdGenerator,
};
use article_service::presentation::http::{
    routes::{RouterOptions, build_router},
    state::HttpState,
};

/// Services over the given in-memory repo with a fixed clock and sequential ids.
pub fn build_services(repo: Arc<mocks::InMemoryArticleRepo>) -> ApplicationServices {
    let write: Arc<dyn ArticleWriteRepository> = repo.clone();
    let read: Arc<dyn ArticleReadRepository> = repo;
    let clock: Arc<dyn Clock> = Arc::new(mocks::DummyClock);
    let ids: Arc<dyn IdGenerator> = Arc::new(mocks::SequentialIds::default());
    ApplicationServices::new(write, read, clock, ids)
}

/// Full stack: router → services → SQLite (in memory).
pub async fn make_test_router() -> axum::Router {
    let pool = database::init_memory_pool().await.expect("memory pool");
    database::run_migrations(&pool).await.expect("migrations");

    let repo = Arc::new(SqliteArticleRepository::new(pool));
    let write: Arc<dyn ArticleWriteRepository> = repo.clone();
    let read: Arc<dyn ArticleReadRepository> = repo;
    let usecase: Arc<dyn ArticleUsecase> = Arc::new(ApplicationServices::new(
        write,
        read,
        Arc::new(SystemClock),
        Arc::new(UuidIdGenerator),
    ));

    build_router(HttpState { usecase }, RouterOptions::default())
}

/// Router whose store fails every call with a persistence error.
pub fn make_failing_router() -> axum::Router {
    let repo = Arc::new(mocks::FailingArticleRepo);
    let write: Arc<dyn ArticleWriteRepository> = repo.clone();
    let read: Arc<dyn ArticleReadRepository> = repo;
    let usecase: Arc<dyn ArticleUsecase> = Arc::new(ApplicationServices::new(
        write,
        read,
        Arc::new(mocks::DummyClock),
        Arc::new(mocks::SequentialIds::default()),
    ));

    build_router(HttpState { usecase }, RouterOptions::default())
}

/// Send one request through a clone of the router.
pub async fn send(app: &axum::Router, method: Method, uri: &str, body: Option<Value>) -> Response {
    let builder = Request::builder().method(method).uri(uri);
    let req = match body {
        Some(json) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.clone().oneshot(req).await.unwrap()
}

pub async fn body_bytes(resp: Response) -> Vec<u8> {
    body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body")
        .to_vec()
}

pub async fn read_json(resp: Response) -> Value {
    let bytes = body_bytes(resp).await;
    serde_json::from_slice(&bytes).expect("expected valid json body")
}

/// Assert that a response is an ErrorResponse JSON with the expected status and error string.
pub async fn assert_error_response(resp: Response, expected_status: StatusCode, expected_error: &str) {
    // Check status first
    assert_eq!(resp.status(), expected_status);
    let (parts, body_stream) = resp.into_parts();
    let body_bytes = body::to_bytes(body_stream, 1024 * 1024).await.expect("read body");
    let ct = parts.headers.get("content-type").and_then(|v| v.to_str().ok()).unwrap_or("");
    assert!(ct.starts_with("application/json"), "unexpected content-type: {}", ct);
    let json: Value = serde_json::from_slice(&body_bytes).expect("expected valid json body for error");
    let err_field = json.get("error").and_then(|v| v.as_str()).unwrap_or("");
    let msg_field = json.get("message").and_then(|v| v.as_str()).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {}", err_field);
    assert!(!msg_field.is_empty(), "expected non-empty message field in ErrorResponse");
}
