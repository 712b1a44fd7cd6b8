use std::sync::Arc;

use crate::domain::{category::CategoryRepository, page::PageRepository};

pub struct CategoryQueryService {
    pub(super) category_repo: Arc<dyn CategoryRepository>,
    pub(super) page_repo: Arc<dyn PageRepository>,
}

impl CategoryQueryService {
    pub fn new(
        category_repo: Arc<dyn CategoryRepository>,
        page_repo: Arc<dyn PageRepository>,
    ) -> Self {
        Self {
            category_repo,
            page_repo,
        }
    }
}
