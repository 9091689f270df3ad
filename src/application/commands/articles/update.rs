// src/application/commands/articles/update.rs
use super::ArticleCommandService;
use crate::{
    application::{
        dto::{ArticleDto, AuthenticatedUser, TagsInput},
        error::{ApplicationError, ApplicationResult},
        population::ArticleView,
    },
    domain::article::{
        ArticleContent, ArticleEdit, ArticleExcerpt, ArticleTitle,
        specifications::{ArticleSpecification, CanEditArticleSpec},
    },
};

pub struct UpdateArticleCommand {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub excerpt: String,
    pub tags: TagsInput,
}

impl ArticleCommandService {
    pub async fn update_article(
        &self,
        actor: &AuthenticatedUser,
        command: UpdateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let mut article = self.load_article(command.id).await?;

        if !CanEditArticleSpec::new(&article, actor.id).is_satisfied() {
            return Err(ApplicationError::forbidden("Not authorized"));
        }

        let title = ArticleTitle::new(command.title)?;
        let edit = ArticleEdit {
            slug: self.derive_slug(&title)?,
            title,
            content: ArticleContent::new(command.content)?,
            excerpt: ArticleExcerpt::new(command.excerpt)?,
            tags: command.tags.into_tags()?,
        };
        article.apply_edit(edit, self.clock.now());

        let updated = self.write_repo.save(&article).await?;
        tracing::info!(article_id = %updated.id, slug = %updated.slug, "article updated");

        self.profiles
            .populate_article(updated, ArticleView::SUMMARY)
            .await
    }
}
