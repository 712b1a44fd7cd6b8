use super::{CategoryDto, PageDto};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct IndexDto {
    pub categories: Vec<CategoryDto>,
    pub pages: Vec<PageDto>,
    pub visits: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AboutDto {
    pub visits: u32,
}
