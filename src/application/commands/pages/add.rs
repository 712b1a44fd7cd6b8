use super::PageCommandService;
use crate::{
    application::{dto::PageDto, error::ApplicationResult, forms::PageInput},
    domain::{category::CategorySlug, page::NewPage},
};

pub struct AddPageCommand {
    pub category_slug: String,
    pub title: String,
    pub url: String,
}

impl PageCommandService {
    /// Add a page to the category addressed by slug. `None` when the
    /// category does not exist.
    pub async fn add_page(&self, command: AddPageCommand) -> ApplicationResult<Option<PageDto>> {
        let AddPageCommand {
            category_slug,
            title,
            url,
        } = command;

        let slug = CategorySlug::from_persisted(category_slug);
        let Some(category) = self.category_repo.find_by_slug(&slug).await? else {
            return Ok(None);
        };
        let (title, url) = PageInput { title, url }.validate()?;

        let created = self
            .save_service
            .insert(NewPage::new(category.id, title, url))
            .await?;
        tracing::info!(page_id = %created.id, category_id = %category.id, "page added");
        Ok(Some(created.into()))
    }
}
