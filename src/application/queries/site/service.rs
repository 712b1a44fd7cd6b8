use std::sync::Arc;

use crate::{
    application::ports::time::Clock,
    domain::{category::CategoryRepository, page::PageRepository},
};

pub struct SiteQueryService {
    pub(super) category_repo: Arc<dyn CategoryRepository>,
    pub(super) page_repo: Arc<dyn PageRepository>,
    pub(super) clock: Arc<dyn Clock>,
}

impl SiteQueryService {
    pub fn new(
        category_repo: Arc<dyn CategoryRepository>,
        page_repo: Arc<dyn PageRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            category_repo,
            page_repo,
            clock,
        }
    }
}
