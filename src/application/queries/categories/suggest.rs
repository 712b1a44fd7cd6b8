use super::CategoryQueryService;
use crate::application::{dto::CategoryDto, error::ApplicationResult};

pub const SUGGESTION_LIMIT: u32 = 8;

pub struct SuggestCategoriesQuery {
    pub starts_with: Option<String>,
    pub limit: Option<u32>,
}

impl CategoryQueryService {
    /// Name-prefix suggestions for the sidebar search box.
    pub async fn suggest_categories(
        &self,
        query: SuggestCategoriesQuery,
    ) -> ApplicationResult<Vec<CategoryDto>> {
        let limit = query
            .limit
            .filter(|limit| *limit > 0)
            .map_or(SUGGESTION_LIMIT, |limit| limit.min(SUGGESTION_LIMIT));
        let prefix = query.starts_with.as_deref().map(str::trim).unwrap_or("");

        let categories = self
            .category_repo
            .list_by_name_prefix(prefix, limit)
            .await?;
        Ok(categories.into_iter().map(Into::into).collect())
    }
}
