use std::sync::Arc;

use crate::application::{
    dto::SearchResultDto, error::ApplicationResult, ports::search::ContentSearch,
};

pub struct SearchQuery {
    pub query: String,
}

pub struct SearchQueryService {
    search: Arc<dyn ContentSearch>,
}

impl SearchQueryService {
    pub fn new(search: Arc<dyn ContentSearch>) -> Self {
        Self { search }
    }

    pub async fn search(&self, query: SearchQuery) -> ApplicationResult<Vec<SearchResultDto>> {
        let term = query.query.trim();
        if term.is_empty() {
            return Ok(Vec::new());
        }
        self.search.search(term).await
    }
}
