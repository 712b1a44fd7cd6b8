// src/domain/category/services.rs
use std::sync::Arc;

use crate::application::ports::util::SlugGenerator;
use crate::domain::category::entity::{Category, NewCategory};
use crate::domain::category::normalize::normalize_category;
use crate::domain::category::repository::CategoryRepository;
use crate::domain::errors::DomainResult;

/// The save path for categories: normalize, then persist.
pub struct CategorySaveService {
    repo: Arc<dyn CategoryRepository>,
    slugger: Arc<dyn SlugGenerator>,
}

impl CategorySaveService {
    pub fn new(repo: Arc<dyn CategoryRepository>, slugger: Arc<dyn SlugGenerator>) -> Self {
        Self { repo, slugger }
    }

    pub async fn insert(&self, category: NewCategory) -> DomainResult<Category> {
        let category = normalize_category(category, self.slugger.as_ref());
        self.repo.insert(category).await
    }

    pub async fn save(&self, category: Category) -> DomainResult<Category> {
        let category = normalize_category(category, self.slugger.as_ref());
        self.repo.update(category).await
    }
}
