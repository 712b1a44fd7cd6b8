use super::CategoryCommandService;
use crate::{
    application::{dto::CategoryDto, error::ApplicationResult, forms::CategoryInput},
    domain::category::NewCategory,
};

pub struct CreateCategoryCommand {
    pub name: String,
}

impl CategoryCommandService {
    pub async fn create_category(
        &self,
        command: CreateCategoryCommand,
    ) -> ApplicationResult<CategoryDto> {
        let name = CategoryInput { name: command.name }.validate()?;
        self.ensure_name_available(&name, None).await?;

        let created = self.save_service.insert(NewCategory::new(name)).await?;
        tracing::info!(category_id = %created.id, slug = %created.slug(), "category created");
        Ok(created.into())
    }
}
