//! Save-time normalization for categories.
//!
//! Every category write goes through [`normalize_category`]: the slug is
//! rederived from the current name (so renames change it) and negative view
//! counters are clamped to zero. Normalization never rejects a record.

use crate::application::ports::util::SlugGenerator;
use crate::domain::category::value_objects::{CategoryName, CategorySlug};

/// Fields the category normalizer reads and rewrites.
pub trait CategoryRecord {
    fn name(&self) -> &CategoryName;
    fn views(&self) -> i64;
    fn apply_normalized(&mut self, slug: CategorySlug, views: i64);
}

pub fn normalize_category<R: CategoryRecord>(mut record: R, slugger: &dyn SlugGenerator) -> R {
    let slug = CategorySlug::from_persisted(slugger.slugify(record.name().as_str()));
    let views = record.views().max(0);
    record.apply_normalized(slug, views);
    record
}
