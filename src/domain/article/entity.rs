// src/domain/article/entity.rs
use crate::domain::article::value_objects::{
    ArticleContent, ArticleExcerpt, ArticleId, ArticleSlug, ArticleTags, ArticleTitle,
    CommentText, CoverImage,
};
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Article {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub slug: ArticleSlug,
    pub content: ArticleContent,
    pub excerpt: ArticleExcerpt,
    pub author_id: UserId,
    pub cover_image: Option<CoverImage>,
    pub tags: ArticleTags,
    pub likes: Vec<UserId>,
    pub comments: Vec<Comment>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub author_id: UserId,
    pub text: CommentText,
    pub created_at: DateTime<Utc>,
}

/// Fields an owner may overwrite. `author_id` and `cover_image` are not among them.
#[derive(Debug, Clone)]
pub struct ArticleEdit {
    pub title: ArticleTitle,
    pub slug: ArticleSlug,
    pub content: ArticleContent,
    pub excerpt: ArticleExcerpt,
    pub tags: ArticleTags,
}

impl Article {
    pub fn is_authored_by(&self, user_id: UserId) -> bool {
        self.author_id == user_id
    }

    pub fn apply_edit(&mut self, edit: ArticleEdit, now: DateTime<Utc>) {
        let ArticleEdit {
            title,
            slug,
            content,
            excerpt,
            tags,
        } = edit;
        self.title = title;
        self.slug = slug;
        self.content = content;
        self.excerpt = excerpt;
        self.tags = tags;
        self.updated_at = now;
    }

    /// Adds `user_id` to the likes, or removes it if already present.
    /// Returns whether the user likes the article afterwards.
    pub fn toggle_like(&mut self, user_id: UserId, now: DateTime<Utc>) -> bool {
        let liked = match self.likes.iter().position(|id| *id == user_id) {
            Some(index) => {
                self.likes.remove(index);
                false
            }
            None => {
                self.likes.push(user_id);
                true
            }
        };
        self.updated_at = now;
        liked
    }

    pub fn add_comment(&mut self, author_id: UserId, text: CommentText, now: DateTime<Utc>) {
        self.comments.push(Comment {
            author_id,
            text,
            created_at: now,
        });
        self.updated_at = now;
    }
}

#[derive(Debug, Clone)]
pub struct NewArticle {
    pub title: ArticleTitle,
    pub slug: ArticleSlug,
    pub content: ArticleContent,
    pub excerpt: ArticleExcerpt,
    pub author_id: UserId,
    pub cover_image: Option<CoverImage>,
    pub tags: ArticleTags,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
