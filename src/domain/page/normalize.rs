//! Save-time normalization for pages.

use crate::domain::page::value_objects::VisitWindow;
use chrono::{DateTime, Utc};

pub trait PageRecord {
    fn visits_mut(&mut self) -> &mut VisitWindow;
}

/// Clamp the visit window so that `first_visit <= last_visit <= now`.
/// `now` is supplied by the caller's clock.
pub fn normalize_page<R: PageRecord>(mut record: R, now: DateTime<Utc>) -> R {
    record.visits_mut().clamp(now);
    record
}
