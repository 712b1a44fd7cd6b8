use crate::domain::page::Page;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PageDto {
    pub id: i64,
    pub category_id: i64,
    pub title: String,
    pub url: String,
    pub views: i64,
    #[serde(default)]
    pub first_visit: Option<DateTime<Utc>>,
    #[serde(default)]
    pub last_visit: Option<DateTime<Utc>>,
}

impl From<Page> for PageDto {
    fn from(page: Page) -> Self {
        Self {
            id: page.id.into(),
            category_id: page.category_id.into(),
            title: page.title.into_inner(),
            url: page.url.into_inner(),
            views: page.views,
            first_visit: page.visits.first_visit,
            last_visit: page.visits.last_visit,
        }
    }
}
