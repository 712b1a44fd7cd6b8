// src/application/ports/util.rs
/// Turns a display name into a lowercase, hyphen-delimited, URL-safe token.
pub trait SlugGenerator: Send + Sync {
    fn slugify(&self, input: &str) -> String;
}
