use super::PageCommandService;
use crate::{
    application::{dto::PageDto, error::ApplicationResult, forms::PageInput},
    domain::{category::CategoryId, page::NewPage},
};

/// Add a search result to a category in one click.
pub struct AutoAddPageCommand {
    pub category_id: i64,
    pub title: String,
    pub url: String,
}

impl PageCommandService {
    /// Get-or-create the page, then return all pages of the category, most
    /// viewed first. `None` when the category does not exist.
    pub async fn auto_add_page(
        &self,
        command: AutoAddPageCommand,
    ) -> ApplicationResult<Option<Vec<PageDto>>> {
        let category_id = CategoryId::new(command.category_id)?;
        if self.category_repo.find_by_id(category_id).await?.is_none() {
            return Ok(None);
        }

        let (title, url) = PageInput {
            title: command.title,
            url: command.url,
        }
        .validate()?;

        if self
            .page_repo
            .find_exact(category_id, &title, &url)
            .await?
            .is_none()
        {
            let created = self
                .save_service
                .insert(NewPage::new(category_id, title, url))
                .await?;
            tracing::info!(page_id = %created.id, %category_id, "page added from search");
        }

        let pages = self.page_repo.list_by_category(category_id).await?;
        Ok(Some(pages.into_iter().map(Into::into).collect()))
    }
}
