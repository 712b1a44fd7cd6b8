mod pages;
mod service;
mod suggest;

pub use pages::ListPagesQuery;
pub use service::CategoryQueryService;
pub use suggest::{SUGGESTION_LIMIT, SuggestCategoriesQuery};
