// src/infrastructure/repositories/postgres_page.rs
use super::map_sqlx;
use crate::domain::category::CategoryId;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::page::{
    NewPage, Page, PageId, PageRepository, PageTitle, PageUrl, VisitWindow,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresPageRepository {
    pool: PgPool,
}

impl PostgresPageRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct PageRow {
    id: i64,
    category_id: i64,
    title: String,
    url: String,
    views: i64,
    first_visit: Option<DateTime<Utc>>,
    last_visit: Option<DateTime<Utc>>,
}

impl TryFrom<PageRow> for Page {
    type Error = DomainError;

    fn try_from(row: PageRow) -> Result<Self, Self::Error> {
        Ok(Page {
            id: PageId::new(row.id)?,
            category_id: CategoryId::new(row.category_id)?,
            title: PageTitle::new(row.title)?,
            url: PageUrl::parse(&row.url)?,
            views: row.views,
            visits: VisitWindow::new(row.first_visit, row.last_visit),
        })
    }
}

fn into_pages(rows: Vec<PageRow>) -> DomainResult<Vec<Page>> {
    rows.into_iter().map(Page::try_from).collect()
}

#[async_trait]
impl PageRepository for PostgresPageRepository {
    async fn insert(&self, page: NewPage) -> DomainResult<Page> {
        let NewPage {
            category_id,
            title,
            url,
            views,
            visits,
        } = page;

        let row = sqlx::query_as::<_, PageRow>(
            "INSERT INTO pages (category_id, title, url, views, first_visit, last_visit)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING id, category_id, title, url, views, first_visit, last_visit",
        )
        .bind(i64::from(category_id))
        .bind(title.as_str())
        .bind(url.as_str())
        .bind(views)
        .bind(visits.first_visit)
        .bind(visits.last_visit)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Page::try_from(row)
    }

    async fn find_exact(
        &self,
        category_id: CategoryId,
        title: &PageTitle,
        url: &PageUrl,
    ) -> DomainResult<Option<Page>> {
        let row = sqlx::query_as::<_, PageRow>(
            "SELECT id, category_id, title, url, views, first_visit, last_visit
             FROM pages WHERE category_id = $1 AND title = $2 AND url = $3
             ORDER BY id ASC LIMIT 1",
        )
        .bind(i64::from(category_id))
        .bind(title.as_str())
        .bind(url.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Page::try_from).transpose()
    }

    async fn list_by_category(&self, category_id: CategoryId) -> DomainResult<Vec<Page>> {
        let rows = sqlx::query_as::<_, PageRow>(
            "SELECT id, category_id, title, url, views, first_visit, last_visit
             FROM pages WHERE category_id = $1
             ORDER BY views DESC, id ASC",
        )
        .bind(i64::from(category_id))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        into_pages(rows)
    }

    async fn list_most_viewed(&self, limit: u32) -> DomainResult<Vec<Page>> {
        let rows = sqlx::query_as::<_, PageRow>(
            "SELECT id, category_id, title, url, views, first_visit, last_visit
             FROM pages ORDER BY views DESC, id ASC LIMIT $1",
        )
        .bind(i64::from(limit))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        into_pages(rows)
    }

    async fn record_visit(&self, id: PageId, now: DateTime<Utc>) -> DomainResult<Option<Page>> {
        // One statement so concurrent visits cannot lose increments. The
        // timestamp expressions mirror `VisitWindow::record` followed by
        // `VisitWindow::clamp`.
        let row = sqlx::query_as::<_, PageRow>(
            "UPDATE pages SET
                 views = views + 1,
                 first_visit = LEAST(COALESCE(first_visit, $2), $2),
                 last_visit = $2
             WHERE id = $1
             RETURNING id, category_id, title, url, views, first_visit, last_visit",
        )
        .bind(i64::from(id))
        .bind(now)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Page::try_from).transpose()
    }
}
