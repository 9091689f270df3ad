// src/application/commands/articles/create.rs
use super::ArticleCommandService;
use crate::{
    application::{
        dto::{ArticleDto, AuthenticatedUser, TagsInput},
        error::ApplicationResult,
        population::ArticleView,
    },
    domain::article::{ArticleContent, ArticleExcerpt, ArticleTitle, CoverImage, NewArticle},
};

pub struct CreateArticleCommand {
    pub title: String,
    pub content: String,
    pub excerpt: String,
    pub tags: TagsInput,
    pub cover_image: Option<String>,
}

impl ArticleCommandService {
    pub async fn create_article(
        &self,
        actor: &AuthenticatedUser,
        command: CreateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let cover_image = command
            .cover_image
            .filter(|value| !value.is_empty())
            .map(CoverImage::new)
            .transpose()?;

        let title = ArticleTitle::new(command.title)?;
        let content = ArticleContent::new(command.content)?;
        let excerpt = ArticleExcerpt::new(command.excerpt)?;
        let tags = command.tags.into_tags()?;
        let slug = self.derive_slug(&title)?;
        let now = self.clock.now();

        let new_article = NewArticle {
            title,
            slug,
            content,
            excerpt,
            author_id: actor.id,
            cover_image,
            tags,
            created_at: now,
            updated_at: now,
        };

        let created = self.write_repo.insert(new_article).await?;
        tracing::info!(
            article_id = %created.id,
            slug = %created.slug,
            author_id = %created.author_id,
            "article created"
        );

        self.profiles
            .populate_article(created, ArticleView::SUMMARY)
            .await
    }
}
