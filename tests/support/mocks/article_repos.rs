// tests/support/mocks/article_repos.rs
use async_trait::async_trait;
use penwise::domain::{
    article::{Article, ArticleId, ArticleReadRepository, ArticleSlug, ArticleWriteRepository, NewArticle},
    errors::{DomainError, DomainResult},
};
use std::sync::Mutex;

/// Backs both article repository ports, enforcing slug uniqueness like
/// the `articles_slug_key` constraint.
#[derive(Debug, Default)]
pub struct InMemoryArticleStore {
    articles: Mutex<Vec<Article>>,
}

impl InMemoryArticleStore {
    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Article>> {
        self.articles.lock().expect("article store poisoned")
    }

    pub fn snapshot(&self, id: i64) -> Option<Article> {
        self.lock().iter().find(|a| i64::from(a.id) == id).cloned()
    }
}

fn slug_conflict() -> DomainError {
    DomainError::Conflict("articles_slug_key".into())
}

#[async_trait]
impl ArticleWriteRepository for InMemoryArticleStore {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let mut articles = self.lock();
        if articles.iter().any(|a| a.slug == article.slug) {
            return Err(slug_conflict());
        }

        let created = Article {
            id: ArticleId::new(articles.len() as i64 + 1)?,
            title: article.title,
            slug: article.slug,
            content: article.content,
            excerpt: article.excerpt,
            author_id: article.author_id,
            cover_image: article.cover_image,
            tags: article.tags,
            likes: Vec::new(),
            comments: Vec::new(),
            created_at: article.created_at,
            updated_at: article.updated_at,
        };
        articles.push(created.clone());
        Ok(created)
    }

    async fn save(&self, article: &Article) -> DomainResult<Article> {
        let mut articles = self.lock();
        if articles
            .iter()
            .any(|a| a.id != article.id && a.slug == article.slug)
        {
            return Err(slug_conflict());
        }

        let slot = articles
            .iter_mut()
            .find(|a| a.id == article.id)
            .ok_or_else(|| DomainError::NotFound("article not found".into()))?;
        *slot = article.clone();
        Ok(article.clone())
    }
}

#[async_trait]
impl ArticleReadRepository for InMemoryArticleStore {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        Ok(self.lock().iter().find(|a| a.id == id).cloned())
    }

    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<Article>> {
        Ok(self.lock().iter().find(|a| &a.slug == slug).cloned())
    }

    async fn list_newest_first(&self) -> DomainResult<Vec<Article>> {
        let mut articles = self.lock().clone();
        articles.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| i64::from(b.id).cmp(&i64::from(a.id)))
        });
        Ok(articles)
    }
}
