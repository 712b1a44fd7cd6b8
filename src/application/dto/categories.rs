use crate::application::dto::PageDto;
use crate::domain::category::Category;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryDto {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub views: i64,
    pub likes: i64,
}

impl From<Category> for CategoryDto {
    fn from(category: Category) -> Self {
        Self {
            id: category.id.into(),
            slug: category.slug().as_str().to_owned(),
            name: category.name.into_inner(),
            views: category.views,
            likes: category.likes,
        }
    }
}

/// A category together with its pages, most viewed first.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryDetailDto {
    pub category: CategoryDto,
    pub pages: Vec<PageDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LikeDto {
    pub likes: i64,
}
