pub mod categories;
pub mod pages;
pub mod search;
pub mod site;

pub use categories::{CategoryDetailDto, CategoryDto, LikeDto};
pub use pages::PageDto;
pub use search::SearchResultDto;
pub use site::{AboutDto, IndexDto};
