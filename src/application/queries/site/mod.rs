mod about;
mod index;
mod service;

pub use about::AboutQuery;
pub use index::{INDEX_LIMIT, IndexQuery};
pub use service::SiteQueryService;
