// src/domain/page/entity.rs
use crate::domain::category::CategoryId;
use crate::domain::page::normalize::PageRecord;
use crate::domain::page::value_objects::{PageId, PageTitle, PageUrl, VisitWindow};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Page {
    pub id: PageId,
    pub category_id: CategoryId,
    pub title: PageTitle,
    pub url: PageUrl,
    pub views: i64,
    pub visits: VisitWindow,
}

impl Page {
    /// Count one tracked visit: bump the view counter, stamp the visit
    /// window, and re-clamp it against `now`.
    pub fn record_visit(&mut self, now: DateTime<Utc>) {
        self.views += 1;
        self.visits.record(now);
        self.visits.clamp(now);
    }
}

impl PageRecord for Page {
    fn visits_mut(&mut self) -> &mut VisitWindow {
        &mut self.visits
    }
}

#[derive(Debug, Clone)]
pub struct NewPage {
    pub category_id: CategoryId,
    pub title: PageTitle,
    pub url: PageUrl,
    pub views: i64,
    pub visits: VisitWindow,
}

impl NewPage {
    /// A page that has never been visited.
    pub fn new(category_id: CategoryId, title: PageTitle, url: PageUrl) -> Self {
        Self {
            category_id,
            title,
            url,
            views: 0,
            visits: VisitWindow::default(),
        }
    }

    pub fn with_visits(mut self, views: i64, visits: VisitWindow) -> Self {
        self.views = views;
        self.visits = visits;
        self
    }
}

impl PageRecord for NewPage {
    fn visits_mut(&mut self) -> &mut VisitWindow {
        &mut self.visits
    }
}
