// src/presentation/http/extractors.rs
use crate::{domain::visits::SiteVisits, presentation::http::state::HttpState};
use axum::{
    Extension,
    extract::{FromRequest, FromRequestParts},
    http::{HeaderValue, request::Parts},
};
use headers::{Cookie, HeaderMapExt};

use super::error::HttpError;

pub const VISIT_COOKIE: &str = "rango_visits";

/// The caller's site visit counter, if it sent a valid signed cookie.
#[derive(Debug, Clone, Copy)]
pub struct VisitSession(pub Option<SiteVisits>);

impl<S> FromRequestParts<S> for VisitSession
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Extension(app_state) = Extension::<HttpState>::from_request_parts(parts, state)
            .await
            .map_err(|_| HttpError::internal("application state missing"))?;

        let session = parts
            .headers
            .typed_get::<Cookie>()
            .and_then(|cookie| cookie.get(VISIT_COOKIE).map(str::to_owned))
            .and_then(|token| app_state.services.visit_codec().decode(&token));

        Ok(Self(session))
    }
}

/// `Set-Cookie` value carrying an encoded visit session.
pub fn visit_cookie(token: &str) -> Result<HeaderValue, HttpError> {
    HeaderValue::from_str(&format!(
        "{VISIT_COOKIE}={token}; Path=/; HttpOnly; SameSite=Lax; Max-Age=1209600"
    ))
    .map_err(|_| HttpError::internal("could not encode visit cookie"))
}

/// `axum::Json` with rejections rendered as [`HttpError`].
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(HttpError))]
pub struct ApiJson<T>(pub T);

/// `axum::extract::Query` with rejections rendered as [`HttpError`].
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(HttpError))]
pub struct ApiQuery<T>(pub T);

/// `axum::extract::Path` with rejections rendered as [`HttpError`].
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(HttpError))]
pub struct ApiPath<T>(pub T);
