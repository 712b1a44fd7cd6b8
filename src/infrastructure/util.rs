use crate::application::ports::util::SlugGenerator;
use slug::slugify;

/// Slugs via the `slug` crate: transliterated to ASCII, lowercased,
/// non-alphanumeric runs collapsed to one hyphen, no leading or trailing
/// hyphen.
#[derive(Default, Clone)]
pub struct DefaultSlugGenerator;

impl SlugGenerator for DefaultSlugGenerator {
    fn slugify(&self, input: &str) -> String {
        slugify(input)
    }
}
