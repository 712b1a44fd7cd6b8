// src/application/ports/mod.rs
pub mod search;
pub mod session;
pub mod time;
pub mod util;

