//! Validated form input.
//!
//! Raw submissions are turned into domain values here, one constraint per
//! field, before any command touches the repositories.

use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::category::CategoryName;
use crate::domain::page::{PageTitle, PageUrl};

#[derive(Debug, Clone)]
pub struct CategoryInput {
    pub name: String,
}

impl CategoryInput {
    /// `name`: required, trimmed, at most 128 characters.
    pub fn validate(self) -> ApplicationResult<CategoryName> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ApplicationError::validation("name is required"));
        }
        Ok(CategoryName::new(name)?)
    }
}

#[derive(Debug, Clone)]
pub struct PageInput {
    pub title: String,
    pub url: String,
}

impl PageInput {
    /// `title`: required, trimmed, at most 128 characters.
    /// `url`: required; `http://` is assumed when no scheme is given; must
    /// then be an absolute URL with a host.
    pub fn validate(self) -> ApplicationResult<(PageTitle, PageUrl)> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(ApplicationError::validation("title is required"));
        }
        let title = PageTitle::new(title)?;

        let url = self.url.trim();
        if url.is_empty() {
            return Err(ApplicationError::validation("url is required"));
        }
        let url = PageUrl::parse(&with_default_scheme(url))?;

        Ok((title, url))
    }
}

/// `scheme "://"` only counts at the very start: `[A-Za-z][A-Za-z0-9+.-]*`.
/// A `://` later in the path or query does not make the URL absolute.
fn has_scheme(url: &str) -> bool {
    let Some((scheme, _)) = url.split_once("://") else {
        return false;
    };
    let mut chars = scheme.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

fn with_default_scheme(url: &str) -> String {
    if has_scheme(url) {
        url.to_owned()
    } else {
        format!("http://{url}")
    }
}
