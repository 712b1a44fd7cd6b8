mod disabled;
mod webhose;

pub use disabled::DisabledContentSearch;
pub use webhose::{SearchError, WebhoseContentSearch};
