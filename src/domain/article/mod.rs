// src/domain/article/mod.rs
pub mod entity;
pub mod repository;
pub mod specifications;
pub mod value_objects;

pub use entity::{Article, ArticleEdit, Comment, NewArticle};
pub use repository::{ArticleReadRepository, ArticleWriteRepository};
pub use value_objects::{
    ArticleContent, ArticleExcerpt, ArticleId, ArticleSlug, ArticleTags, ArticleTitle,
    CommentText, CoverImage,
};
