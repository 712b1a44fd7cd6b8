// src/infrastructure/repositories/mod.rs
mod error;
mod postgres_category;
mod postgres_page;

pub use error::map_sqlx;
pub use postgres_category::PostgresCategoryRepository;
pub use postgres_page::PostgresPageRepository;
