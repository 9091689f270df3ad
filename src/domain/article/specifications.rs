// src/domain/article/specifications.rs
use crate::domain::article::entity::Article;
use crate::domain::user::value_objects::UserId;

pub trait ArticleSpecification {
    fn is_satisfied(&self) -> bool;
}

/// Only the author of an article may change its content.
pub struct CanEditArticleSpec<'a> {
    article: &'a Article,
    user_id: UserId,
}

impl<'a> CanEditArticleSpec<'a> {
    pub fn new(article: &'a Article, user_id: UserId) -> Self {
        Self { article, user_id }
    }
}

impl ArticleSpecification for CanEditArticleSpec<'_> {
    fn is_satisfied(&self) -> bool {
        self.article.is_authored_by(self.user_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::article::value_objects::{
        ArticleContent, ArticleExcerpt, ArticleId, ArticleSlug, ArticleTags, ArticleTitle,
    };
    use chrono::Utc;

    fn article_by(author: i64) -> Article {
        Article {
            id: ArticleId::new(1).unwrap(),
            title: ArticleTitle::new("t").unwrap(),
            slug: ArticleSlug::new("t").unwrap(),
            content: ArticleContent::new("c").unwrap(),
            excerpt: ArticleExcerpt::new("e").unwrap(),
            author_id: UserId::new(author).unwrap(),
            cover_image: None,
            tags: ArticleTags::default(),
            likes: vec![],
            comments: vec![],
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn author_can_edit() {
        let article = article_by(5);
        assert!(CanEditArticleSpec::new(&article, UserId::new(5).unwrap()).is_satisfied());
    }

    #[test]
    fn other_user_cannot_edit() {
        let article = article_by(5);
        assert!(!CanEditArticleSpec::new(&article, UserId::new(6).unwrap()).is_satisfied());
    }
}
