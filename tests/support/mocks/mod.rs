// tests/support/mocks/mod.rs
pub mod repos;
pub mod search;
pub mod time;

pub use repos::{InMemoryCategoryRepo, InMemoryPageRepo};
pub use search::{StubSearch, sample_result};
pub use time::{FixedClock, SteppingClock, fixed_now};
