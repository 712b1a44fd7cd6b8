// src/presentation/http/controllers/pages.rs
use crate::application::{
    commands::pages::{AutoAddPageCommand, TrackVisitCommand},
    dto::PageDto,
};
use crate::presentation::http::error::{FoundOr404, HttpResult};
use crate::presentation::http::extractors::{ApiJson, ApiQuery};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, response::Redirect};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Deserialize, ToSchema)]
pub struct AutoAddPageRequest {
    pub category_id: i64,
    pub title: String,
    pub url: String,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct GotoParams {
    /// Page to visit. Without it the client is sent to the index.
    #[serde(default)]
    pub page_id: Option<i64>,
}

#[utoipa::path(
    post,
    path = "/api/v1/pages/auto-add",
    request_body = AutoAddPageRequest,
    responses(
        (status = 200, description = "All pages of the category after the add, most viewed first.", body = [PageDto]),
        (status = 404, description = "Unknown category.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Pages"
)]
pub async fn auto_add_page(
    Extension(state): Extension<HttpState>,
    ApiJson(payload): ApiJson<AutoAddPageRequest>,
) -> HttpResult<Json<Vec<PageDto>>> {
    state
        .services
        .page_commands
        .auto_add_page(AutoAddPageCommand {
            category_id: payload.category_id,
            title: payload.title,
            url: payload.url,
        })
        .await
        .found_or_404("category")
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/goto",
    params(GotoParams),
    responses(
        (status = 303, description = "Visit recorded; redirects to the page url."),
        (status = 404, description = "Unknown page.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Pages"
)]
pub async fn goto(
    Extension(state): Extension<HttpState>,
    ApiQuery(params): ApiQuery<GotoParams>,
) -> HttpResult<Redirect> {
    let Some(page_id) = params.page_id else {
        return Ok(Redirect::to("/api/v1/index"));
    };

    let page = state
        .services
        .page_commands
        .track_visit(TrackVisitCommand { page_id })
        .await
        .found_or_404("page")?;

    Ok(Redirect::to(&page.url))
}
