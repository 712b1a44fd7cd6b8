// src/presentation/http/controllers/site.rs
use crate::application::{
    dto::{AboutDto, IndexDto},
    queries::site::{AboutQuery, IndexQuery},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{VisitSession, visit_cookie};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    http::header::SET_COOKIE,
    response::{AppendHeaders, IntoResponse, Response},
};

#[utoipa::path(
    get,
    path = "/api/v1/index",
    responses(
        (status = 200, description = "Most liked categories, most viewed pages and the visit count. Refreshes the visit cookie.", body = IndexDto)
    ),
    tag = "Site"
)]
pub async fn index(
    Extension(state): Extension<HttpState>,
    VisitSession(session): VisitSession,
) -> HttpResult<Response> {
    let (dto, session) = state
        .services
        .site_queries
        .index(IndexQuery { session })
        .await
        .into_http()?;

    let token = state.services.visit_codec().encode(&session);
    let cookie = visit_cookie(&token)?;

    Ok((AppendHeaders([(SET_COOKIE, cookie)]), Json(dto)).into_response())
}

#[utoipa::path(
    get,
    path = "/api/v1/about",
    responses(
        (status = 200, description = "Visit count of the caller, zero without a session.", body = AboutDto)
    ),
    tag = "Site"
)]
pub async fn about(
    Extension(state): Extension<HttpState>,
    VisitSession(session): VisitSession,
) -> Json<AboutDto> {
    Json(state.services.site_queries.about(AboutQuery { session }))
}
