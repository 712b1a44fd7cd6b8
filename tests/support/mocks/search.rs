// tests/support/mocks/search.rs
use async_trait::async_trait;
use rango::application::{
    ApplicationResult, dto::SearchResultDto, ports::search::ContentSearch,
};
use std::sync::Mutex;

/// Returns canned results and remembers every term it was asked for.
#[derive(Default)]
pub struct StubSearch {
    results: Vec<SearchResultDto>,
    terms: Mutex<Vec<String>>,
}

impl StubSearch {
    pub fn with_results(results: Vec<SearchResultDto>) -> Self {
        Self {
            results,
            terms: Mutex::new(Vec::new()),
        }
    }

    pub fn terms(&self) -> Vec<String> {
        self.terms.lock().unwrap().clone()
    }
}

#[async_trait]
impl ContentSearch for StubSearch {
    async fn search(&self, term: &str) -> ApplicationResult<Vec<SearchResultDto>> {
        self.terms.lock().unwrap().push(term.to_string());
        Ok(self.results.clone())
    }
}

pub fn sample_result(title: &str) -> SearchResultDto {
    SearchResultDto {
        title: title.to_string(),
        url: format!("http://example.com/{}", title.to_lowercase().replace(' ', "-")),
        site: "example.com".to_string(),
        site_full: "http://example.com".to_string(),
    }
}
