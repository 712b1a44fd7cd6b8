use super::CategoryCommandService;
use crate::{
    application::{dto::CategoryDto, error::ApplicationResult, forms::CategoryInput},
    domain::category::CategorySlug,
};

pub struct RenameCategoryCommand {
    pub slug: String,
    pub name: String,
}

impl CategoryCommandService {
    /// Renaming rederives the slug, so the category moves to a new address.
    pub async fn rename_category(
        &self,
        command: RenameCategoryCommand,
    ) -> ApplicationResult<Option<CategoryDto>> {
        let name = CategoryInput { name: command.name }.validate()?;
        let slug = CategorySlug::from_persisted(command.slug);

        let Some(mut category) = self.category_repo.find_by_slug(&slug).await? else {
            return Ok(None);
        };
        self.ensure_name_available(&name, Some(&category)).await?;

        let previous_slug = category.slug().clone();
        category.rename(name);
        let saved = self.save_service.save(category).await?;

        if saved.slug() != &previous_slug {
            tracing::info!(
                category_id = %saved.id,
                from = %previous_slug,
                to = %saved.slug(),
                "category slug changed"
            );
        }
        Ok(Some(saved.into()))
    }
}
