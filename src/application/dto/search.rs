use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SearchResultDto {
    pub title: String,
    pub url: String,
    pub site: String,
    pub site_full: String,
}
