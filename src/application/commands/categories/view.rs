use super::CategoryCommandService;
use crate::{
    application::{
        dto::{CategoryDetailDto, CategoryDto},
        error::ApplicationResult,
    },
    domain::category::CategorySlug,
};

pub struct ViewCategoryCommand {
    pub slug: String,
}

impl CategoryCommandService {
    /// Open a category: count the view and return it with its pages.
    pub async fn view_category(
        &self,
        command: ViewCategoryCommand,
    ) -> ApplicationResult<Option<CategoryDetailDto>> {
        let slug = CategorySlug::from_persisted(command.slug);
        let Some(category) = self.category_repo.find_by_slug(&slug).await? else {
            return Ok(None);
        };

        let Some(viewed) = self.category_repo.increment_views(category.id).await? else {
            return Ok(None);
        };
        let pages = self.page_repo.list_by_category(viewed.id).await?;

        Ok(Some(CategoryDetailDto {
            category: CategoryDto::from(viewed),
            pages: pages.into_iter().map(Into::into).collect(),
        }))
    }
}
