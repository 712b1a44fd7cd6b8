// src/application/commands/pages/service.rs
use std::sync::Arc;

use crate::domain::{
    category::CategoryRepository,
    page::{PageRepository, PageSaveService},
};

pub struct PageCommandService {
    pub(super) category_repo: Arc<dyn CategoryRepository>,
    pub(super) page_repo: Arc<dyn PageRepository>,
    pub(super) save_service: Arc<PageSaveService>,
}

impl PageCommandService {
    pub fn new(
        category_repo: Arc<dyn CategoryRepository>,
        page_repo: Arc<dyn PageRepository>,
        save_service: Arc<PageSaveService>,
    ) -> Self {
        Self {
            category_repo,
            page_repo,
            save_service,
        }
    }
}
