// src/domain/visits.rs
use chrono::{DateTime, Duration, Utc};

/// Per-client site visit counter carried between requests by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SiteVisits {
    pub visits: u32,
    pub last_visit: DateTime<Utc>,
}

impl SiteVisits {
    /// Count a hit on the landing page.
    ///
    /// A client without a session starts at one visit. A returning client is
    /// counted again once at least one whole second has passed since the
    /// recorded visit, or when the recorded visit lies in the future (the
    /// clock went back); otherwise the session is returned untouched.
    pub fn register(previous: Option<Self>, now: DateTime<Utc>) -> Self {
        match previous {
            None => Self {
                visits: 1,
                last_visit: now,
            },
            Some(session) if Self::counts_again(now - session.last_visit) => Self {
                visits: session.visits.saturating_add(1),
                last_visit: now,
            },
            Some(session) => session,
        }
    }

    fn counts_again(elapsed: Duration) -> bool {
        elapsed.num_seconds() > 0 || elapsed < Duration::zero()
    }

    pub fn count(session: Option<&Self>) -> u32 {
        session.map_or(0, |s| s.visits)
    }
}
