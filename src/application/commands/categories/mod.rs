// src/application/commands/categories/mod.rs
mod create;
mod like;
mod rename;
mod service;
mod view;

pub use create::CreateCategoryCommand;
pub use like::LikeCategoryCommand;
pub use rename::RenameCategoryCommand;
pub use service::CategoryCommandService;
pub use view::ViewCategoryCommand;
