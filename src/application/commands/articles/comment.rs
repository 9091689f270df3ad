// src/application/commands/articles/comment.rs
use super::ArticleCommandService;
use crate::{
    application::{
        dto::{AuthenticatedUser, CommentDto},
        error::ApplicationResult,
        population::ProfileFields,
    },
    domain::article::CommentText,
};

pub struct AddCommentCommand {
    pub id: i64,
    pub content: String,
}

impl ArticleCommandService {
    pub async fn add_comment(
        &self,
        actor: &AuthenticatedUser,
        command: AddCommentCommand,
    ) -> ApplicationResult<Vec<CommentDto>> {
        let mut article = self.load_article(command.id).await?;
        let text = CommentText::new(command.content)?;
        article.add_comment(actor.id, text, self.clock.now());

        let saved = self.write_repo.save(&article).await?;
        tracing::info!(
            article_id = %saved.id,
            author_id = %actor.id,
            comments = saved.comments.len(),
            "comment added"
        );

        self.profiles
            .populate_comments(saved.comments, ProfileFields::Summary)
            .await
    }
}
