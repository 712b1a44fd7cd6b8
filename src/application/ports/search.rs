// src/application/ports/search.rs
use crate::application::{ApplicationResult, dto::SearchResultDto};
use async_trait::async_trait;

/// External web content search.
#[async_trait]
pub trait ContentSearch: Send + Sync {
    /// `term` is already trimmed and non-empty.
    async fn search(&self, term: &str) -> ApplicationResult<Vec<SearchResultDto>>;
}
