// tests/support/helpers.rs
use super::mocks::{FixedClock, InMemoryCategoryRepo, InMemoryPageRepo, StubSearch};
use axum::body::{self, Body};
use axum::http::{Request, StatusCode};
use axum::response::Response;
use rango::application::ports::{
    search::ContentSearch, session::VisitSessionCodec, time::Clock, util::SlugGenerator,
};
use rango::application::services::ApplicationServices;
use rango::infrastructure::{security::visit_cookie::HmacVisitSessionCodec, util::DefaultSlugGenerator};
use rango::presentation::http::{
    routes::{RouterSettings, build_router},
    state::HttpState,
};
use serde_json::Value;
use std::sync::Arc;

pub const TEST_SESSION_SECRET: &str = "test-secret-test-secret-test-secret!";

/// Services over in-memory stores, plus handles on those stores.
pub struct TestApp {
    pub services: Arc<ApplicationServices>,
    pub categories: Arc<InMemoryCategoryRepo>,
    pub pages: Arc<InMemoryPageRepo>,
    pub search: Arc<StubSearch>,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with(Arc::new(FixedClock), Arc::new(StubSearch::default()))
    }

    pub fn with(clock: Arc<dyn Clock>, search: Arc<StubSearch>) -> Self {
        let categories = Arc::new(InMemoryCategoryRepo::new());
        let pages = Arc::new(InMemoryPageRepo::new());
        let slugger: Arc<dyn SlugGenerator> = Arc::new(DefaultSlugGenerator);
        let content_search: Arc<dyn ContentSearch> = search.clone();

        let services = Arc::new(ApplicationServices::new(
            categories.clone(),
            pages.clone(),
            clock,
            slugger,
            content_search,
            test_codec(),
        ));

        Self {
            services,
            categories,
            pages,
            search,
        }
    }

    pub fn router(&self) -> axum::Router {
        let state = HttpState {
            services: Arc::clone(&self.services),
        };
        build_router(state, RouterSettings::default())
    }
}

pub fn test_codec() -> Arc<dyn VisitSessionCodec> {
    Arc::new(HmacVisitSessionCodec::new(TEST_SESSION_SECRET).expect("hmac accepts any key length"))
}

pub fn make_test_router() -> axum::Router {
    TestApp::new().router()
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn json_request(method: &str, uri: &str, payload: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap()
}

pub async fn read_json(resp: Response) -> Value {
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("expected a json body")
}

/// Assert that a response is an ErrorResponse JSON with the expected status and error string.
pub async fn assert_error_response(resp: Response, expected_status: StatusCode, expected_error: &str) {
    assert_eq!(resp.status(), expected_status);
    let ct = resp
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    assert!(ct.starts_with("application/json"), "unexpected content-type: {ct}");
    let json = read_json(resp).await;
    let err_field = json.get("error").and_then(Value::as_str).unwrap_or("");
    let msg_field = json.get("message").and_then(Value::as_str).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {err_field}");
    assert!(!msg_field.is_empty(), "expected non-empty message field in ErrorResponse");
}
