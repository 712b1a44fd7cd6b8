// src/domain/page/services.rs
use std::sync::Arc;

use crate::application::ports::time::Clock;
use crate::domain::errors::DomainResult;
use crate::domain::page::entity::{NewPage, Page};
use crate::domain::page::normalize::normalize_page;
use crate::domain::page::repository::PageRepository;
use crate::domain::page::value_objects::PageId;

/// The save path for pages: clamp visit timestamps against the clock, then
/// persist.
pub struct PageSaveService {
    repo: Arc<dyn PageRepository>,
    clock: Arc<dyn Clock>,
}

impl PageSaveService {
    pub fn new(repo: Arc<dyn PageRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repo, clock }
    }

    pub async fn insert(&self, page: NewPage) -> DomainResult<Page> {
        let page = normalize_page(page, self.clock.now());
        self.repo.insert(page).await
    }

    pub async fn record_visit(&self, id: PageId) -> DomainResult<Option<Page>> {
        let now = self.clock.now();
        let visited = self.repo.record_visit(id, now).await?;
        Ok(visited.map(|page| normalize_page(page, now)))
    }
}
