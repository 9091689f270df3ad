use super::ArticleQueryService;
use crate::application::{dto::ArticleDto, error::ApplicationResult, population::ArticleView};

impl ArticleQueryService {
    /// Every article, newest first. No paging.
    pub async fn list_articles(&self) -> ApplicationResult<Vec<ArticleDto>> {
        let articles = self.read_repo.list_newest_first().await?;
        self.profiles
            .populate_articles(articles, ArticleView::SUMMARY)
            .await
    }
}
