use super::CategoryQueryService;
use crate::{
    application::{dto::PageDto, error::ApplicationResult},
    domain::category::CategorySlug,
};

pub struct ListPagesQuery {
    pub category_slug: String,
}

impl CategoryQueryService {
    pub async fn list_pages(&self, query: ListPagesQuery) -> ApplicationResult<Option<Vec<PageDto>>> {
        let slug = CategorySlug::from_persisted(query.category_slug);
        let Some(category) = self.category_repo.find_by_slug(&slug).await? else {
            return Ok(None);
        };

        let pages = self.page_repo.list_by_category(category.id).await?;
        Ok(Some(pages.into_iter().map(Into::into).collect()))
    }
}
