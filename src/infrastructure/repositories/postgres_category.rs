// src/infrastructure/repositories/postgres_category.rs
use super::error::{escape_like, map_sqlx};
use crate::domain::category::{
    Category, CategoryId, CategoryName, CategoryRepository, CategorySlug, NewCategory,
};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresCategoryRepository {
    pool: PgPool,
}

impl PostgresCategoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn fetch_optional(
        &self,
        sql: &str,
        id: CategoryId,
    ) -> DomainResult<Option<Category>> {
        let row = sqlx::query_as::<_, CategoryRow>(sql)
            .bind(i64::from(id))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Category::try_from).transpose()
    }
}

#[derive(Debug, FromRow)]
struct CategoryRow {
    id: i64,
    name: String,
    slug: String,
    views: i64,
    likes: i64,
}

impl TryFrom<CategoryRow> for Category {
    type Error = DomainError;

    fn try_from(row: CategoryRow) -> Result<Self, Self::Error> {
        Ok(Category::from_persisted(
            CategoryId::new(row.id)?,
            CategoryName::new(row.name)?,
            CategorySlug::from_persisted(row.slug),
            row.views,
            row.likes,
        ))
    }
}

fn into_categories(rows: Vec<CategoryRow>) -> DomainResult<Vec<Category>> {
    rows.into_iter().map(Category::try_from).collect()
}

#[async_trait]
impl CategoryRepository for PostgresCategoryRepository {
    async fn insert(&self, category: NewCategory) -> DomainResult<Category> {
        let row = sqlx::query_as::<_, CategoryRow>(
            "INSERT INTO categories (name, slug, views, likes)
             VALUES ($1, $2, $3, $4)
             RETURNING id, name, slug, views, likes",
        )
        .bind(category.name.as_str())
        .bind(category.slug().as_str())
        .bind(category.views)
        .bind(category.likes)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Category::try_from(row)
    }

    /// Writes the name and the derived slug. Counters are only ever changed by
    /// the atomic increment statements, so a rename cannot drop a concurrent
    /// view or like.
    async fn update(&self, category: Category) -> DomainResult<Category> {
        let row = sqlx::query_as::<_, CategoryRow>(
            "UPDATE categories SET name = $2, slug = $3
             WHERE id = $1
             RETURNING id, name, slug, views, likes",
        )
        .bind(i64::from(category.id))
        .bind(category.name.as_str())
        .bind(category.slug().as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        let row = row.ok_or_else(|| DomainError::NotFound("category not found".into()))?;
        Category::try_from(row)
    }

    async fn find_by_id(&self, id: CategoryId) -> DomainResult<Option<Category>> {
        self.fetch_optional(
            "SELECT id, name, slug, views, likes FROM categories WHERE id = $1",
            id,
        )
        .await
    }

    async fn find_by_slug(&self, slug: &CategorySlug) -> DomainResult<Option<Category>> {
        // Slugs are not unique; distinct names can collapse to the same slug.
        // The oldest category wins.
        let row = sqlx::query_as::<_, CategoryRow>(
            "SELECT id, name, slug, views, likes FROM categories
             WHERE slug = $1 ORDER BY id ASC LIMIT 1",
        )
        .bind(slug.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Category::try_from).transpose()
    }

    async fn find_by_name(&self, name: &CategoryName) -> DomainResult<Option<Category>> {
        let row = sqlx::query_as::<_, CategoryRow>(
            "SELECT id, name, slug, views, likes FROM categories WHERE name = $1",
        )
        .bind(name.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Category::try_from).transpose()
    }

    async fn increment_views(&self, id: CategoryId) -> DomainResult<Option<Category>> {
        self.fetch_optional(
            "UPDATE categories SET views = GREATEST(views, 0) + 1
             WHERE id = $1
             RETURNING id, name, slug, views, likes",
            id,
        )
        .await
    }

    async fn increment_likes(&self, id: CategoryId) -> DomainResult<Option<Category>> {
        self.fetch_optional(
            "UPDATE categories SET likes = likes + 1
             WHERE id = $1
             RETURNING id, name, slug, views, likes",
            id,
        )
        .await
    }

    async fn list_most_liked(&self, limit: u32) -> DomainResult<Vec<Category>> {
        let rows = sqlx::query_as::<_, CategoryRow>(
            "SELECT id, name, slug, views, likes FROM categories
             ORDER BY likes DESC, id ASC LIMIT $1",
        )
        .bind(i64::from(limit))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        into_categories(rows)
    }

    async fn list_by_name_prefix(&self, prefix: &str, limit: u32) -> DomainResult<Vec<Category>> {
        let pattern = format!("{}%", escape_like(prefix));
        let rows = sqlx::query_as::<_, CategoryRow>(
            "SELECT id, name, slug, views, likes FROM categories
             WHERE name ILIKE $1 ESCAPE '\\'
             ORDER BY name ASC, id ASC LIMIT $2",
        )
        .bind(pattern)
        .bind(i64::from(limit))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        into_categories(rows)
    }
}
