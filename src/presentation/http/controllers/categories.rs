// src/presentation/http/controllers/categories.rs
use crate::application::{
    commands::categories::{
        CreateCategoryCommand, LikeCategoryCommand, RenameCategoryCommand, ViewCategoryCommand,
    },
    dto::{CategoryDetailDto, CategoryDto, LikeDto, PageDto},
    queries::categories::{ListPagesQuery, SuggestCategoriesQuery},
};
use crate::application::commands::pages::AddPageCommand;
use crate::presentation::http::error::{FoundOr404, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{ApiJson, ApiPath, ApiQuery};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, http::StatusCode};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct SuggestParams {
    /// Case-insensitive name prefix. Empty lists every category.
    #[serde(default)]
    pub starts_with: Option<String>,
    /// At most 8.
    #[serde(default)]
    pub limit: Option<u32>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CategoryRequest {
    pub name: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct PageRequest {
    pub title: String,
    pub url: String,
}

#[utoipa::path(
    get,
    path = "/api/v1/categories",
    params(SuggestParams),
    responses(
        (status = 200, description = "Matching categories.", body = [CategoryDto])
    ),
    tag = "Categories"
)]
pub async fn suggest_categories(
    Extension(state): Extension<HttpState>,
    ApiQuery(params): ApiQuery<SuggestParams>,
) -> HttpResult<Json<Vec<CategoryDto>>> {
    state
        .services
        .category_queries
        .suggest_categories(SuggestCategoriesQuery {
            starts_with: params.starts_with,
            limit: params.limit,
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/categories",
    request_body = CategoryRequest,
    responses(
        (status = 201, description = "Category created.", body = CategoryDto),
        (status = 400, description = "Invalid name.", body = crate::presentation::http::error::ErrorResponse),
        (status = 409, description = "Name already taken.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Categories"
)]
pub async fn create_category(
    Extension(state): Extension<HttpState>,
    ApiJson(payload): ApiJson<CategoryRequest>,
) -> HttpResult<(StatusCode, Json<CategoryDto>)> {
    let created = state
        .services
        .category_commands
        .create_category(CreateCategoryCommand { name: payload.name })
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    get,
    path = "/api/v1/categories/{slug}",
    params(("slug" = String, Path, description = "Category slug")),
    responses(
        (status = 200, description = "Category with its pages; counts as a view.", body = CategoryDetailDto),
        (status = 404, description = "Unknown category.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Categories"
)]
pub async fn view_category(
    Extension(state): Extension<HttpState>,
    ApiPath(slug): ApiPath<String>,
) -> HttpResult<Json<CategoryDetailDto>> {
    state
        .services
        .category_commands
        .view_category(ViewCategoryCommand { slug })
        .await
        .found_or_404("category")
        .map(Json)
}

#[utoipa::path(
    put,
    path = "/api/v1/categories/{slug}",
    params(("slug" = String, Path, description = "Current category slug")),
    request_body = CategoryRequest,
    responses(
        (status = 200, description = "Renamed; the slug follows the new name.", body = CategoryDto),
        (status = 404, description = "Unknown category.", body = crate::presentation::http::error::ErrorResponse),
        (status = 409, description = "Name already taken.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Categories"
)]
pub async fn rename_category(
    Extension(state): Extension<HttpState>,
    ApiPath(slug): ApiPath<String>,
    ApiJson(payload): ApiJson<CategoryRequest>,
) -> HttpResult<Json<CategoryDto>> {
    state
        .services
        .category_commands
        .rename_category(RenameCategoryCommand {
            slug,
            name: payload.name,
        })
        .await
        .found_or_404("category")
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/categories/{slug}/like",
    params(("slug" = String, Path, description = "Category slug")),
    responses(
        (status = 200, description = "New like count.", body = LikeDto),
        (status = 404, description = "Unknown category.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Categories"
)]
pub async fn like_category(
    Extension(state): Extension<HttpState>,
    ApiPath(slug): ApiPath<String>,
) -> HttpResult<Json<LikeDto>> {
    state
        .services
        .category_commands
        .like_category(LikeCategoryCommand { slug })
        .await
        .found_or_404("category")
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/categories/{slug}/pages",
    params(("slug" = String, Path, description = "Category slug")),
    responses(
        (status = 200, description = "Pages, most viewed first.", body = [PageDto]),
        (status = 404, description = "Unknown category.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Pages"
)]
pub async fn list_pages(
    Extension(state): Extension<HttpState>,
    ApiPath(slug): ApiPath<String>,
) -> HttpResult<Json<Vec<PageDto>>> {
    state
        .services
        .category_queries
        .list_pages(ListPagesQuery {
            category_slug: slug,
        })
        .await
        .found_or_404("category")
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/categories/{slug}/pages",
    params(("slug" = String, Path, description = "Category slug")),
    request_body = PageRequest,
    responses(
        (status = 201, description = "Page added.", body = PageDto),
        (status = 400, description = "Invalid title or url.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Unknown category.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Pages"
)]
pub async fn add_page(
    Extension(state): Extension<HttpState>,
    ApiPath(slug): ApiPath<String>,
    ApiJson(payload): ApiJson<PageRequest>,
) -> HttpResult<(StatusCode, Json<PageDto>)> {
    let page = state
        .services
        .page_commands
        .add_page(AddPageCommand {
            category_slug: slug,
            title: payload.title,
            url: payload.url,
        })
        .await
        .found_or_404("category")?;

    Ok((StatusCode::CREATED, Json(page)))
}
