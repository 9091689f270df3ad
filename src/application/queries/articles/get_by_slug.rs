use super::ArticleQueryService;
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
        population::ArticleView,
    },
    domain::article::ArticleSlug,
};

pub struct GetArticleBySlugQuery {
    pub slug: String,
}

impl ArticleQueryService {
    pub async fn get_article_by_slug(
        &self,
        query: GetArticleBySlugQuery,
    ) -> ApplicationResult<ArticleDto> {
        // A malformed slug can never match a stored article.
        let slug =
            ArticleSlug::new(query.slug).map_err(|_| ApplicationError::article_not_found())?;
        let article = self
            .read_repo
            .find_by_slug(&slug)
            .await?
            .ok_or_else(ApplicationError::article_not_found)?;

        self.profiles
            .populate_article(article, ArticleView::DETAIL)
            .await
    }
}
