use crate::domain::category::CategoryId;
use crate::domain::errors::DomainResult;
use crate::domain::page::entity::{NewPage, Page};
use crate::domain::page::value_objects::{PageId, PageTitle, PageUrl};
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[async_trait]
pub trait PageRepository: Send + Sync {
    async fn insert(&self, page: NewPage) -> DomainResult<Page>;
    async fn find_exact(
        &self,
        category_id: CategoryId,
        title: &PageTitle,
        url: &PageUrl,
    ) -> DomainResult<Option<Page>>;
    /// Pages of one category ordered by views, most viewed first.
    async fn list_by_category(&self, category_id: CategoryId) -> DomainResult<Vec<Page>>;
    async fn list_most_viewed(&self, limit: u32) -> DomainResult<Vec<Page>>;
    /// Apply [`Page::record_visit`] atomically in the store and return the
    /// updated page, or `None` when the page does not exist.
    async fn record_visit(&self, id: PageId, now: DateTime<Utc>) -> DomainResult<Option<Page>>;
}
