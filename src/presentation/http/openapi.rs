// src/presentation/http/openapi.rs
use axum::{Router, response::Redirect, routing::get};
use serde::{Deserialize, Serialize};
use std::{collections::HashSet, env};
use utoipa::openapi::server::Server;
use utoipa::{Modify, OpenApi, ToSchema};
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::site::index,
        crate::presentation::http::controllers::site::about,
        crate::presentation::http::controllers::categories::suggest_categories,
        crate::presentation::http::controllers::categories::create_category,
        crate::presentation::http::controllers::categories::view_category,
        crate::presentation::http::controllers::categories::rename_category,
        crate::presentation::http::controllers::categories::like_category,
        crate::presentation::http::controllers::categories::list_pages,
        crate::presentation::http::controllers::categories::add_page,
        crate::presentation::http::controllers::pages::auto_add_page,
        crate::presentation::http::controllers::pages::goto,
        crate::presentation::http::controllers::search::search,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::controllers::categories::CategoryRequest,
            crate::presentation::http::controllers::categories::PageRequest,
            crate::presentation::http::controllers::pages::AutoAddPageRequest,
            crate::application::dto::CategoryDto,
            crate::application::dto::CategoryDetailDto,
            crate::application::dto::LikeDto,
            crate::application::dto::PageDto,
            crate::application::dto::SearchResultDto,
            crate::application::dto::IndexDto,
            crate::application::dto::AboutDto
        )
    ),
    tags(
        (name = "Site", description = "Landing page and visit counter"),
        (name = "Categories", description = "Category browsing and editing"),
        (name = "Pages", description = "Pages filed under categories"),
        (name = "Search", description = "External web search"),
        (name = "System", description = "System level endpoints")
    ),
    modifiers(&ApiDocCustomizer),
    info(
        title = "Rango API",
        description = "Categorised link directory",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

struct ApiDocCustomizer;

impl Modify for ApiDocCustomizer {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let servers = openapi.servers.get_or_insert_with(Vec::new);
        servers.clear();

        let mut urls: Vec<String> = env::var("PUBLIC_API_URLS")
            .ok()
            .map(|value| {
                value
                    .split(',')
                    .map(str::trim)
                    .filter(|segment| !segment.is_empty())
                    .map(|segment| segment.trim_end_matches('/').to_string())
                    .collect()
            })
            .unwrap_or_default();

        if urls.is_empty() {
            urls.push("http://localhost:8080".to_string());
        }

        let mut seen = HashSet::new();
        for url in urls {
            if seen.insert(url.clone()) {
                servers.push(Server::new(url));
            }
        }
    }
}

pub async fn serve_openapi() -> axum::Json<utoipa::openapi::OpenApi> {
    axum::Json(ApiDoc::openapi())
}

pub fn docs_router() -> Router {
    let openapi = ApiDoc::openapi();
    let swagger = SwaggerUi::new("/docs").url("/api-docs/openapi.json", openapi.clone());
    let redoc = Redoc::with_url("/redoc", openapi);
    Router::new()
        .route("/openapi.json", get(serve_openapi))
        .merge(swagger)
        .merge(redoc)
        .route("/", get(|| async { Redirect::permanent("/docs") }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_every_public_route() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&str> = doc.paths.paths.keys().map(String::as_str).collect();

        for expected in [
            "/health",
            "/api/v1/index",
            "/api/v1/about",
            "/api/v1/categories",
            "/api/v1/categories/{slug}",
            "/api/v1/categories/{slug}/like",
            "/api/v1/categories/{slug}/pages",
            "/api/v1/pages/auto-add",
            "/api/v1/goto",
            "/api/v1/search",
        ] {
            assert!(paths.contains(&expected), "missing {expected}");
        }
    }

    #[test]
    fn servers_default_to_local_listener() {
        let doc = ApiDoc::openapi();
        let servers = doc.servers.unwrap_or_default();
        assert!(!servers.is_empty());
    }
}
