use super::CategoryCommandService;
use crate::{
    application::{dto::LikeDto, error::ApplicationResult},
    domain::category::CategorySlug,
};

pub struct LikeCategoryCommand {
    pub slug: String,
}

impl CategoryCommandService {
    pub async fn like_category(
        &self,
        command: LikeCategoryCommand,
    ) -> ApplicationResult<Option<LikeDto>> {
        let slug = CategorySlug::from_persisted(command.slug);
        let Some(category) = self.category_repo.find_by_slug(&slug).await? else {
            return Ok(None);
        };

        let liked = self.category_repo.increment_likes(category.id).await?;
        Ok(liked.map(|category| LikeDto {
            likes: category.likes,
        }))
    }
}
