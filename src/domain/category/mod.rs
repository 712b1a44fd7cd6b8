pub mod entity;
pub mod normalize;
pub mod repository;
pub mod services;
pub mod value_objects;

pub use entity::{Category, NewCategory};
pub use normalize::{CategoryRecord, normalize_category};
pub use repository::CategoryRepository;
pub use services::CategorySaveService;
pub use value_objects::{CATEGORY_NAME_MAX_CHARS, CategoryId, CategoryName, CategorySlug};
