use crate::application::{
    ApplicationResult, dto::SearchResultDto, ports::search::ContentSearch,
};
use async_trait::async_trait;

/// Used when no search API key is configured: every search comes back empty.
#[derive(Default, Clone)]
pub struct DisabledContentSearch;

#[async_trait]
impl ContentSearch for DisabledContentSearch {
    async fn search(&self, term: &str) -> ApplicationResult<Vec<SearchResultDto>> {
        tracing::warn!(term, "content search requested but no search API key is configured");
        Ok(Vec::new())
    }
}
