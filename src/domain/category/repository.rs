use crate::domain::category::entity::{Category, NewCategory};
use crate::domain::category::value_objects::{CategoryId, CategoryName, CategorySlug};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

/// Persistence port for categories.
///
/// `insert` and `update` receive records that were already normalized by
/// [`CategorySaveService`](crate::domain::category::services::CategorySaveService).
/// Counter increments must be atomic in the store.
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn insert(&self, category: NewCategory) -> DomainResult<Category>;
    async fn update(&self, category: Category) -> DomainResult<Category>;
    async fn find_by_id(&self, id: CategoryId) -> DomainResult<Option<Category>>;
    async fn find_by_slug(&self, slug: &CategorySlug) -> DomainResult<Option<Category>>;
    async fn find_by_name(&self, name: &CategoryName) -> DomainResult<Option<Category>>;
    async fn increment_views(&self, id: CategoryId) -> DomainResult<Option<Category>>;
    async fn increment_likes(&self, id: CategoryId) -> DomainResult<Option<Category>>;
    /// Categories ordered by likes, most liked first.
    async fn list_most_liked(&self, limit: u32) -> DomainResult<Vec<Category>>;
    /// Case-insensitive name prefix match ordered by name. An empty prefix
    /// matches every category.
    async fn list_by_name_prefix(&self, prefix: &str, limit: u32) -> DomainResult<Vec<Category>>;
}
