pub mod entity;
pub mod normalize;
pub mod repository;
pub mod services;
pub mod value_objects;

pub use entity::{NewPage, Page};
pub use normalize::{PageRecord, normalize_page};
pub use repository::PageRepository;
pub use services::PageSaveService;
pub use value_objects::{PAGE_TITLE_MAX_CHARS, PageId, PageTitle, PageUrl, VisitWindow};
