use crate::application::{dto::SearchResultDto, queries::search::SearchQuery};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::ApiQuery;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};
use serde::Deserialize;
use utoipa::IntoParams;

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchParams {
    /// Search phrase; blank returns no results.
    #[serde(default)]
    pub q: String,
}

#[utoipa::path(
    get,
    path = "/api/v1/search",
    params(SearchParams),
    responses(
        (status = 200, description = "At most ten web results.", body = [SearchResultDto]),
        (status = 500, description = "Search backend failed.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Search"
)]
pub async fn search(
    Extension(state): Extension<HttpState>,
    ApiQuery(params): ApiQuery<SearchParams>,
) -> HttpResult<Json<Vec<SearchResultDto>>> {
    state
        .services
        .search_queries
        .search(SearchQuery { query: params.q })
        .await
        .into_http()
        .map(Json)
}
