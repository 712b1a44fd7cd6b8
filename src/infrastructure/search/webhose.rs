// src/infrastructure/search/webhose.rs
use crate::application::{
    ApplicationResult, dto::SearchResultDto, error::ApplicationError,
    ports::search::ContentSearch,
};
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;
use url::Url;

pub const DEFAULT_MAX_RESULTS: usize = 10;

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("invalid search endpoint: {0}")]
    Endpoint(#[from] url::ParseError),
    #[error("http client error: {0}")]
    Client(#[from] reqwest::Error),
}

/// Client for a webhose-style `filterWebContent` API.
#[derive(Clone)]
pub struct WebhoseContentSearch {
    client: reqwest::Client,
    endpoint: Url,
    token: String,
    max_results: usize,
}

impl WebhoseContentSearch {
    pub fn new(
        base_url: &str,
        token: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, SearchError> {
        let base = if base_url.ends_with('/') {
            Url::parse(base_url)?
        } else {
            Url::parse(&format!("{base_url}/"))?
        };
        let endpoint = base.join("filterWebContent")?;
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            endpoint,
            token: token.into(),
            max_results: DEFAULT_MAX_RESULTS,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[derive(Debug, Deserialize)]
struct FilterResponse {
    #[serde(default)]
    posts: Vec<Post>,
}

#[derive(Debug, Deserialize)]
struct Post {
    thread: Thread,
}

#[derive(Debug, Deserialize)]
struct Thread {
    #[serde(default)]
    title: String,
    #[serde(default)]
    url: String,
    #[serde(default)]
    site: String,
    #[serde(default)]
    site_full: String,
}

fn phrase_query(term: &str) -> String {
    format!("\"{term}\" language:english")
}

fn into_results(response: FilterResponse, max_results: usize) -> Vec<SearchResultDto> {
    response
        .posts
        .into_iter()
        .take(max_results)
        .map(|post| SearchResultDto {
            title: post.thread.title,
            url: post.thread.url,
            site: post.thread.site,
            site_full: post.thread.site_full,
        })
        .collect()
}

#[async_trait]
impl ContentSearch for WebhoseContentSearch {
    async fn search(&self, term: &str) -> ApplicationResult<Vec<SearchResultDto>> {
        let query = phrase_query(term);
        let response = self
            .client
            .get(self.endpoint.clone())
            .query(&[
                ("token", self.token.as_str()),
                ("format", "json"),
                ("q", query.as_str()),
                ("sort", "crawled"),
            ])
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|err| {
                tracing::warn!(error = %err, "content search request failed");
                ApplicationError::infrastructure("content search is unavailable")
            })?;

        let body = response.json::<FilterResponse>().await.map_err(|err| {
            tracing::warn!(error = %err, "content search returned an unreadable body");
            ApplicationError::infrastructure("content search returned an invalid response")
        })?;

        let results = into_results(body, self.max_results);
        tracing::debug!(term, results = results.len(), "content search completed");
        Ok(results)
    }
}
