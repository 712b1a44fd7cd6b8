pub mod categories;
pub mod search;
pub mod site;
