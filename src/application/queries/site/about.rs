use super::SiteQueryService;
use crate::{application::dto::AboutDto, domain::visits::SiteVisits};

pub struct AboutQuery {
    pub session: Option<SiteVisits>,
}

impl SiteQueryService {
    pub fn about(&self, query: AboutQuery) -> AboutDto {
        AboutDto {
            visits: SiteVisits::count(query.session.as_ref()),
        }
    }
}
