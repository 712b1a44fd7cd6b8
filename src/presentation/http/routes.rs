// src/presentation/http/routes.rs
use crate::config::RateLimitConfig;
use crate::presentation::http::middleware::rate_limit::{RateLimitLayer, rate_limit_layer};
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::{categories, pages, search, site},
    openapi::{self, StatusResponse},
};
use axum::{
    Extension, Router,
    http::{HeaderValue, Method},
    routing::{MethodRouter, get, post, put},
};
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

/// Knobs for the outer HTTP stack.
#[derive(Clone, Debug, Default)]
pub struct RouterSettings {
    /// Empty allows any origin.
    pub allowed_origins: Vec<String>,
    pub rate_limit: Option<RateLimitConfig>,
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let parsed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "ignoring unparsable CORS origin");
                None
            }
        })
        .collect();

    let allow_origin = if parsed.is_empty() {
        AllowOrigin::from(Any)
    } else {
        AllowOrigin::list(parsed)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::OPTIONS])
        .allow_headers(Any)
        .max_age(Duration::from_secs(3600))
}

fn limited(route: MethodRouter, limiter: Option<&RateLimitLayer>) -> MethodRouter {
    match limiter {
        Some(layer) => route.layer(layer.clone()),
        None => route,
    }
}

pub fn build_router(state: HttpState, settings: RouterSettings) -> Router {
    let limiter = settings.rate_limit.and_then(|config| {
        let layer = rate_limit_layer(config);
        if layer.is_none() {
            tracing::warn!(?config, "rate limit settings rejected; limiter disabled");
        }
        layer
    });
    let limiter = limiter.as_ref();

    Router::new()
        .merge(openapi::docs_router())
        .route("/health", get(health))
        .route("/api/v1/index", get(site::index))
        .route("/api/v1/about", get(site::about))
        .route(
            "/api/v1/categories",
            get(categories::suggest_categories)
                .merge(limited(post(categories::create_category), limiter)),
        )
        .route(
            "/api/v1/categories/{slug}",
            limited(get(categories::view_category), limiter)
                .merge(limited(put(categories::rename_category), limiter)),
        )
        .route(
            "/api/v1/categories/{slug}/like",
            limited(post(categories::like_category), limiter),
        )
        .route(
            "/api/v1/categories/{slug}/pages",
            get(categories::list_pages).merge(limited(post(categories::add_page), limiter)),
        )
        .route(
            "/api/v1/pages/auto-add",
            limited(post(pages::auto_add_page), limiter),
        )
        .route("/api/v1/goto", limited(get(pages::goto), limiter))
        .route("/api/v1/search", limited(get(search::search), limiter))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&settings.allowed_origins))
        .layer(CompressionLayer::new())
        .layer(Extension(state))
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health check.", body = crate::presentation::http::openapi::StatusResponse)
    ),
    tag = "System"
)]
pub async fn health() -> axum::Json<StatusResponse> {
    axum::Json(StatusResponse {
        status: "ok".into(),
    })
}
