// src/application/commands/articles/like.rs
use super::ArticleCommandService;
use crate::application::{
    dto::{AuthenticatedUser, LikesDto},
    error::ApplicationResult,
};

pub struct ToggleLikeCommand {
    pub id: i64,
}

impl ArticleCommandService {
    /// Adds the caller to the article's likes, or removes them if already there.
    pub async fn toggle_like(
        &self,
        actor: &AuthenticatedUser,
        command: ToggleLikeCommand,
    ) -> ApplicationResult<LikesDto> {
        let mut article = self.load_article(command.id).await?;
        let liked = article.toggle_like(actor.id, self.clock.now());

        let saved = self.write_repo.save(&article).await?;
        tracing::debug!(article_id = %saved.id, user_id = %actor.id, liked, "like toggled");

        Ok(LikesDto::from_users(&saved.likes))
    }
}
