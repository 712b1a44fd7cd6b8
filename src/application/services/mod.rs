// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::{categories::CategoryCommandService, pages::PageCommandService},
        ports::{
            search::ContentSearch, session::VisitSessionCodec, time::Clock, util::SlugGenerator,
        },
        queries::{
            categories::CategoryQueryService, search::SearchQueryService, site::SiteQueryService,
        },
    },
    domain::{
        category::{CategoryRepository, CategorySaveService},
        page::{PageRepository, PageSaveService},
    },
};

pub struct ApplicationServices {
    pub category_commands: Arc<CategoryCommandService>,
    pub page_commands: Arc<PageCommandService>,
    pub category_queries: Arc<CategoryQueryService>,
    pub site_queries: Arc<SiteQueryService>,
    pub search_queries: Arc<SearchQueryService>,
    visit_codec: Arc<dyn VisitSessionCodec>,
}

impl ApplicationServices {
    pub fn new(
        category_repo: Arc<dyn CategoryRepository>,
        page_repo: Arc<dyn PageRepository>,
        clock: Arc<dyn Clock>,
        slugger: Arc<dyn SlugGenerator>,
        content_search: Arc<dyn ContentSearch>,
        visit_codec: Arc<dyn VisitSessionCodec>,
    ) -> Self {
        let category_saver = Arc::new(CategorySaveService::new(
            Arc::clone(&category_repo),
            Arc::clone(&slugger),
        ));
        let page_saver = Arc::new(PageSaveService::new(
            Arc::clone(&page_repo),
            Arc::clone(&clock),
        ));

        let category_commands = Arc::new(CategoryCommandService::new(
            Arc::clone(&category_repo),
            Arc::clone(&page_repo),
            category_saver,
        ));
        let page_commands = Arc::new(PageCommandService::new(
            Arc::clone(&category_repo),
            Arc::clone(&page_repo),
            page_saver,
        ));

        let category_queries = Arc::new(CategoryQueryService::new(
            Arc::clone(&category_repo),
            Arc::clone(&page_repo),
        ));
        let site_queries = Arc::new(SiteQueryService::new(
            Arc::clone(&category_repo),
            Arc::clone(&page_repo),
            Arc::clone(&clock),
        ));
        let search_queries = Arc::new(SearchQueryService::new(content_search));

        Self {
            category_commands,
            page_commands,
            category_queries,
            site_queries,
            search_queries,
            visit_codec,
        }
    }

    pub fn visit_codec(&self) -> Arc<dyn VisitSessionCodec> {
        Arc::clone(&self.visit_codec)
    }
}
