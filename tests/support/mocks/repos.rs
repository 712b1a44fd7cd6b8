// tests/support/mocks/repos.rs
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rango::domain::category::{
    Category, CategoryId, CategoryName, CategoryRepository, CategorySlug, NewCategory,
};
use rango::domain::errors::{DomainError, DomainResult};
use rango::domain::page::{NewPage, Page, PageId, PageRepository, PageTitle, PageUrl};
use std::collections::BTreeMap;
use std::sync::Mutex;

/* ------------------------------ categories ------------------------------ */

/// In-memory category store keyed by id. Enforces the unique name
/// constraint and keeps counters out of `update` like the SQL store does.
#[derive(Default)]
pub struct InMemoryCategoryRepo {
    rows: Mutex<BTreeMap<i64, Category>>,
}

impl InMemoryCategoryRepo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every stored category, ordered by id.
    pub fn snapshot(&self) -> Vec<Category> {
        self.rows.lock().unwrap().values().cloned().collect()
    }

    fn bump(&self, id: CategoryId, apply: impl FnOnce(&mut Category)) -> Option<Category> {
        let mut rows = self.rows.lock().unwrap();
        let stored = rows.get_mut(&i64::from(id))?;
        apply(stored);
        Some(stored.clone())
    }
}

#[async_trait]
impl CategoryRepository for InMemoryCategoryRepo {
    async fn insert(&self, category: NewCategory) -> DomainResult<Category> {
        let mut rows = self.rows.lock().unwrap();
        if rows.values().any(|c| c.name == category.name) {
            return Err(DomainError::Conflict("category name already exists".into()));
        }
        let id = rows.keys().next_back().copied().unwrap_or(0) + 1;
        let stored = Category::from_persisted(
            CategoryId::new(id)?,
            category.name.clone(),
            category.slug().clone(),
            category.views,
            category.likes,
        );
        rows.insert(id, stored.clone());
        Ok(stored)
    }

    async fn update(&self, category: Category) -> DomainResult<Category> {
        let mut rows = self.rows.lock().unwrap();
        if rows
            .values()
            .any(|c| c.name == category.name && c.id != category.id)
        {
            return Err(DomainError::Conflict("category name already exists".into()));
        }
        let key = i64::from(category.id);
        let Some(current) = rows.get(&key) else {
            return Err(DomainError::NotFound("category not found".into()));
        };
        let stored = Category::from_persisted(
            category.id,
            category.name.clone(),
            category.slug().clone(),
            current.views,
            current.likes,
        );
        rows.insert(key, stored.clone());
        Ok(stored)
    }

    async fn find_by_id(&self, id: CategoryId) -> DomainResult<Option<Category>> {
        Ok(self.rows.lock().unwrap().get(&i64::from(id)).cloned())
    }

    async fn find_by_slug(&self, slug: &CategorySlug) -> DomainResult<Option<Category>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .values()
            .find(|c| c.slug() == slug)
            .cloned())
    }

    async fn find_by_name(&self, name: &CategoryName) -> DomainResult<Option<Category>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .values()
            .find(|c| &c.name == name)
            .cloned())
    }

    async fn increment_views(&self, id: CategoryId) -> DomainResult<Option<Category>> {
        Ok(self.bump(id, |c| c.views = c.views.max(0) + 1))
    }

    async fn increment_likes(&self, id: CategoryId) -> DomainResult<Option<Category>> {
        Ok(self.bump(id, |c| c.likes += 1))
    }

    async fn list_most_liked(&self, limit: u32) -> DomainResult<Vec<Category>> {
        let mut all = self.snapshot();
        all.sort_by(|a, b| b.likes.cmp(&a.likes).then(a.id.cmp(&b.id)));
        all.truncate(limit as usize);
        Ok(all)
    }

    async fn list_by_name_prefix(&self, prefix: &str, limit: u32) -> DomainResult<Vec<Category>> {
        let prefix = prefix.to_lowercase();
        let mut matches: Vec<Category> = self
            .snapshot()
            .into_iter()
            .filter(|c| c.name.as_str().to_lowercase().starts_with(&prefix))
            .collect();
        matches.sort_by(|a, b| a.name.as_str().cmp(b.name.as_str()).then(a.id.cmp(&b.id)));
        matches.truncate(limit as usize);
        Ok(matches)
    }
}

/* -------------------------------- pages --------------------------------- */

#[derive(Default)]
pub struct InMemoryPageRepo {
    rows: Mutex<BTreeMap<i64, Page>>,
}

impl InMemoryPageRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> Vec<Page> {
        self.rows.lock().unwrap().values().cloned().collect()
    }

    /// Store a page as-is, bypassing normalization. Used to seed odd rows.
    pub fn seed(&self, page: Page) {
        self.rows
            .lock()
            .unwrap()
            .insert(i64::from(page.id), page);
    }
}

fn by_views(mut pages: Vec<Page>) -> Vec<Page> {
    pages.sort_by(|a, b| b.views.cmp(&a.views).then(a.id.cmp(&b.id)));
    pages
}

#[async_trait]
impl PageRepository for InMemoryPageRepo {
    async fn insert(&self, page: NewPage) -> DomainResult<Page> {
        let mut rows = self.rows.lock().unwrap();
        let id = rows.keys().next_back().copied().unwrap_or(0) + 1;
        let stored = Page {
            id: PageId::new(id)?,
            category_id: page.category_id,
            title: page.title,
            url: page.url,
            views: page.views,
            visits: page.visits,
        };
        rows.insert(id, stored.clone());
        Ok(stored)
    }

    async fn find_exact(
        &self,
        category_id: CategoryId,
        title: &PageTitle,
        url: &PageUrl,
    ) -> DomainResult<Option<Page>> {
        Ok(self
            .snapshot()
            .into_iter()
            .find(|p| p.category_id == category_id && &p.title == title && &p.url == url))
    }

    async fn list_by_category(&self, category_id: CategoryId) -> DomainResult<Vec<Page>> {
        Ok(by_views(
            self.snapshot()
                .into_iter()
                .filter(|p| p.category_id == category_id)
                .collect(),
        ))
    }

    async fn list_most_viewed(&self, limit: u32) -> DomainResult<Vec<Page>> {
        let mut pages = by_views(self.snapshot());
        pages.truncate(limit as usize);
        Ok(pages)
    }

    async fn record_visit(&self, id: PageId, now: DateTime<Utc>) -> DomainResult<Option<Page>> {
        let mut rows = self.rows.lock().unwrap();
        Ok(rows.get_mut(&i64::from(id)).map(|page| {
            page.record_visit(now);
            page.clone()
        }))
    }
}
