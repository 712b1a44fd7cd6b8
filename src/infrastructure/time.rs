use crate::application::ports::time::Clock;
use chrono::{DateTime, Utc};

/// Wall clock used for visit timestamps and the site visit counter.
#[derive(Default, Clone)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
