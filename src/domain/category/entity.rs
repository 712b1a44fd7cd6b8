// src/domain/category/entity.rs
use crate::domain::category::normalize::CategoryRecord;
use crate::domain::category::value_objects::{CategoryId, CategoryName, CategorySlug};

#[derive(Debug, Clone)]
pub struct Category {
    pub id: CategoryId,
    pub name: CategoryName,
    pub views: i64,
    pub likes: i64,
    slug: CategorySlug,
}

impl Category {
    /// Rebuild a category from a stored row. The stored slug is trusted as-is;
    /// it is rederived on the next save.
    pub fn from_persisted(
        id: CategoryId,
        name: CategoryName,
        slug: CategorySlug,
        views: i64,
        likes: i64,
    ) -> Self {
        Self {
            id,
            name,
            views,
            likes,
            slug,
        }
    }

    pub fn slug(&self) -> &CategorySlug {
        &self.slug
    }

    /// Change the display name. The slug follows on the next save.
    pub fn rename(&mut self, name: CategoryName) {
        self.name = name;
    }
}

impl CategoryRecord for Category {
    fn name(&self) -> &CategoryName {
        &self.name
    }

    fn views(&self) -> i64 {
        self.views
    }

    fn apply_normalized(&mut self, slug: CategorySlug, views: i64) {
        self.slug = slug;
        self.views = views;
    }
}

#[derive(Debug, Clone)]
pub struct NewCategory {
    pub name: CategoryName,
    pub views: i64,
    pub likes: i64,
    slug: CategorySlug,
}

impl NewCategory {
    pub fn new(name: CategoryName) -> Self {
        Self {
            name,
            views: 0,
            likes: 0,
            slug: CategorySlug::default(),
        }
    }

    pub fn with_counts(mut self, views: i64, likes: i64) -> Self {
        self.views = views;
        self.likes = likes;
        self
    }

    pub fn slug(&self) -> &CategorySlug {
        &self.slug
    }
}

impl CategoryRecord for NewCategory {
    fn name(&self) -> &CategoryName {
        &self.name
    }

    fn views(&self) -> i64 {
        self.views
    }

    fn apply_normalized(&mut self, slug: CategorySlug, views: i64) {
        self.slug = slug;
        self.views = views;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_category_starts_without_slug_or_counts() {
        let draft = NewCategory::new(CategoryName::new("Python").unwrap());
        assert!(draft.slug().is_empty());
        assert_eq!(draft.views, 0);
        assert_eq!(draft.likes, 0);
    }

    #[test]
    fn rename_keeps_stale_slug_until_saved() {
        let mut category = Category::from_persisted(
            CategoryId::new(1).unwrap(),
            CategoryName::new("Python").unwrap(),
            CategorySlug::from_persisted("python"),
            3,
            1,
        );
        category.rename(CategoryName::new("Rust Lang").unwrap());
        assert_eq!(category.name.as_str(), "Rust Lang");
        assert_eq!(category.slug().as_str(), "python");
    }
}
