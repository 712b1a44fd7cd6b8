use crate::domain::errors::{DomainError, DomainResult};
use chrono::{DateTime, Utc};
use std::fmt;
use url::Url;

pub const PAGE_TITLE_MAX_CHARS: usize = 128;

const ALLOWED_URL_SCHEMES: [&str; 4] = ["http", "https", "ftp", "ftps"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PageId(i64);

impl PageId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("page id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<PageId> for i64 {
    fn from(value: PageId) -> Self {
        value.0
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageTitle(String);

impl PageTitle {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.chars().count() > PAGE_TITLE_MAX_CHARS {
            return Err(DomainError::Validation(format!(
                "page title must be at most {PAGE_TITLE_MAX_CHARS} characters"
            )));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for PageTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Absolute URL with a host, restricted to web and ftp schemes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageUrl(String);

impl PageUrl {
    pub fn parse(value: &str) -> DomainResult<Self> {
        let parsed = Url::parse(value.trim())
            .map_err(|err| DomainError::Validation(format!("invalid url: {err}")))?;

        if !ALLOWED_URL_SCHEMES.contains(&parsed.scheme()) {
            return Err(DomainError::Validation(format!(
                "unsupported url scheme: {}",
                parsed.scheme()
            )));
        }
        if parsed.host_str().is_none_or(str::is_empty) {
            return Err(DomainError::Validation("url must include a host".into()));
        }

        Ok(Self(parsed.into()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for PageUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// First and last tracked visit of a page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VisitWindow {
    pub first_visit: Option<DateTime<Utc>>,
    pub last_visit: Option<DateTime<Utc>>,
}

impl VisitWindow {
    pub fn new(first_visit: Option<DateTime<Utc>>, last_visit: Option<DateTime<Utc>>) -> Self {
        Self {
            first_visit,
            last_visit,
        }
    }

    /// Clamp both bounds to `now`, then pull `first_visit` back to
    /// `last_visit` if they are inverted. The order of the steps matters.
    pub fn clamp(&mut self, now: DateTime<Utc>) {
        self.last_visit = self.last_visit.map(|last| last.min(now));
        self.first_visit = self.first_visit.map(|first| first.min(now));

        if let (Some(first), Some(last)) = (self.first_visit, self.last_visit) {
            if first > last {
                self.first_visit = Some(last);
            }
        }
    }

    pub fn record(&mut self, now: DateTime<Utc>) {
        if self.first_visit.is_none() {
            self.first_visit = Some(now);
        }
        self.last_visit = Some(now);
    }

    pub fn is_consistent_at(&self, now: DateTime<Utc>) -> bool {
        let first_ok = self.first_visit.is_none_or(|first| first <= now);
        let last_ok = self.last_visit.is_none_or(|last| last <= now);
        let ordered = match (self.first_visit, self.last_visit) {
            (Some(first), Some(last)) => first <= last,
            _ => true,
        };
        first_ok && last_ok && ordered
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn url_requires_scheme_and_host() {
        assert!(PageUrl::parse("http://www.test.com").is_ok());
        assert!(PageUrl::parse("https://docs.python.org/3/tutorial/").is_ok());
        assert!(PageUrl::parse("www.test.com").is_err());
        assert!(PageUrl::parse("mailto:someone@example.com").is_err());
        assert!(PageUrl::parse("javascript:alert(1)").is_err());
    }

    #[test]
    fn title_length_is_bounded() {
        assert!(PageTitle::new("a".repeat(PAGE_TITLE_MAX_CHARS)).is_ok());
        assert!(PageTitle::new("a".repeat(PAGE_TITLE_MAX_CHARS + 1)).is_err());
    }

    #[test]
    fn clamp_pulls_future_visits_back_to_now() {
        let mut window = VisitWindow::new(
            Some(now() + Duration::days(2)),
            Some(now() + Duration::days(1)),
        );
        window.clamp(now());
        assert_eq!(window.first_visit, Some(now()));
        assert_eq!(window.last_visit, Some(now()));
        assert!(window.is_consistent_at(now()));
    }

    #[test]
    fn clamp_reorders_inverted_past_visits() {
        let first = now() - Duration::days(1);
        let last = now() - Duration::days(2);
        let mut window = VisitWindow::new(Some(first), Some(last));
        window.clamp(now());
        assert_eq!(window.first_visit, Some(last));
        assert_eq!(window.last_visit, Some(last));
    }

    #[test]
    fn clamp_leaves_valid_window_unchanged() {
        let original = VisitWindow::new(
            Some(now() - Duration::days(2)),
            Some(now() - Duration::days(1)),
        );
        let mut window = original;
        window.clamp(now());
        assert_eq!(window, original);
    }

    #[test]
    fn clamp_handles_single_bound() {
        let mut only_first = VisitWindow::new(Some(now() + Duration::hours(3)), None);
        only_first.clamp(now());
        assert_eq!(only_first.first_visit, Some(now()));
        assert_eq!(only_first.last_visit, None);

        let mut only_last = VisitWindow::new(None, Some(now() + Duration::hours(3)));
        only_last.clamp(now());
        assert_eq!(only_last.first_visit, None);
        assert_eq!(only_last.last_visit, Some(now()));
    }

    #[test]
    fn record_sets_first_visit_once() {
        let mut window = VisitWindow::default();
        window.record(now());
        assert_eq!(window.first_visit, Some(now()));

        let later = now() + Duration::minutes(5);
        window.record(later);
        assert_eq!(window.first_visit, Some(now()));
        assert_eq!(window.last_visit, Some(later));
    }
}
