// src/application/commands/categories/service.rs
use std::sync::Arc;

use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::{
        category::{Category, CategoryName, CategoryRepository, CategorySaveService},
        page::PageRepository,
    },
};

pub struct CategoryCommandService {
    pub(super) category_repo: Arc<dyn CategoryRepository>,
    pub(super) page_repo: Arc<dyn PageRepository>,
    pub(super) save_service: Arc<CategorySaveService>,
}

impl CategoryCommandService {
    pub fn new(
        category_repo: Arc<dyn CategoryRepository>,
        page_repo: Arc<dyn PageRepository>,
        save_service: Arc<CategorySaveService>,
    ) -> Self {
        Self {
            category_repo,
            page_repo,
            save_service,
        }
    }

    /// Reject a name already used by a different category.
    pub(super) async fn ensure_name_available(
        &self,
        name: &CategoryName,
        owner: Option<&Category>,
    ) -> ApplicationResult<()> {
        match self.category_repo.find_by_name(name).await? {
            Some(existing) if owner.is_none_or(|owner| owner.id != existing.id) => Err(
                ApplicationError::conflict(format!("category '{name}' already exists")),
            ),
            _ => Ok(()),
        }
    }
}
