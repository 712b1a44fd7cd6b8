// src/presentation/http/controllers/mod.rs
pub mod categories;
pub mod pages;
pub mod search;
pub mod site;
