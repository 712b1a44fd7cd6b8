// src/application/commands/pages/mod.rs
mod add;
mod auto_add;
mod service;
mod track;

pub use add::AddPageCommand;
pub use auto_add::AutoAddPageCommand;
pub use service::PageCommandService;
pub use track::TrackVisitCommand;
