use super::SiteQueryService;
use crate::{
    application::{dto::IndexDto, error::ApplicationResult},
    domain::visits::SiteVisits,
};

pub const INDEX_LIMIT: u32 = 5;

pub struct IndexQuery {
    pub session: Option<SiteVisits>,
}

impl SiteQueryService {
    /// Landing page: most liked categories, most viewed pages, and the
    /// caller's visit count. The updated session is handed back for the
    /// caller to store.
    pub async fn index(&self, query: IndexQuery) -> ApplicationResult<(IndexDto, SiteVisits)> {
        let categories = self.category_repo.list_most_liked(INDEX_LIMIT).await?;
        let pages = self.page_repo.list_most_viewed(INDEX_LIMIT).await?;
        let session = SiteVisits::register(query.session, self.clock.now());

        let dto = IndexDto {
            categories: categories.into_iter().map(Into::into).collect(),
            pages: pages.into_iter().map(Into::into).collect(),
            visits: session.visits,
        };
        Ok((dto, session))
    }
}
