// src/infrastructure/repositories/postgres_article.rs
use super::map_sqlx;
use crate::domain::article::{
    Article, ArticleContent, ArticleExcerpt, ArticleId, ArticleReadRepository, ArticleSlug,
    ArticleTags, ArticleTitle, ArticleWriteRepository, Comment, CommentText, CoverImage,
    NewArticle,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool, types::Json};

const ARTICLE_COLUMNS: &str = "id, title, content, excerpt, slug, author_id, cover_image, tags, likes, comments, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresArticleWriteRepository {
    pool: PgPool,
}

impl PostgresArticleWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresArticleReadRepository {
    pool: PgPool,
}

impl PostgresArticleReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Shape of one element of the `comments` JSONB column.
#[derive(Debug, Serialize, Deserialize)]
struct CommentRecord {
    author_id: i64,
    text: String,
    created_at: DateTime<Utc>,
}

impl From<&Comment> for CommentRecord {
    fn from(comment: &Comment) -> Self {
        Self {
            author_id: comment.author_id.into(),
            text: comment.text.as_str().to_string(),
            created_at: comment.created_at,
        }
    }
}

impl TryFrom<CommentRecord> for Comment {
    type Error = DomainError;

    fn try_from(record: CommentRecord) -> Result<Self, Self::Error> {
        Ok(Comment {
            author_id: UserId::new(record.author_id)?,
            text: CommentText::new(record.text)?,
            created_at: record.created_at,
        })
    }
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    id: i64,
    title: String,
    content: String,
    excerpt: String,
    slug: String,
    author_id: i64,
    cover_image: Option<String>,
    tags: Vec<String>,
    likes: Vec<i64>,
    comments: Json<Vec<CommentRecord>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ArticleRow> for Article {
    type Error = DomainError;

    fn try_from(row: ArticleRow) -> Result<Self, Self::Error> {
        Ok(Article {
            id: ArticleId::new(row.id)?,
            title: ArticleTitle::new(row.title)?,
            slug: ArticleSlug::new(row.slug)?,
            content: ArticleContent::new(row.content)?,
            excerpt: ArticleExcerpt::new(row.excerpt)?,
            author_id: UserId::new(row.author_id)?,
            cover_image: row.cover_image.map(CoverImage::new).transpose()?,
            tags: ArticleTags::new(row.tags),
            likes: row
                .likes
                .into_iter()
                .map(UserId::new)
                .collect::<Result<_, _>>()?,
            comments: row
                .comments
                .0
                .into_iter()
                .map(Comment::try_from)
                .collect::<Result<_, _>>()?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

fn comment_records(comments: &[Comment]) -> Json<Vec<CommentRecord>> {
    Json(comments.iter().map(CommentRecord::from).collect())
}

#[async_trait]
impl ArticleWriteRepository for PostgresArticleWriteRepository {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let NewArticle {
            title,
            slug,
            content,
            excerpt,
            author_id,
            cover_image,
            tags,
            created_at,
            updated_at,
        } = article;

        let sql = format!(
            "INSERT INTO articles (title, content, excerpt, slug, author_id, cover_image, tags, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING {ARTICLE_COLUMNS}"
        );

        let row = sqlx::query_as::<_, ArticleRow>(&sql)
            .bind(title.as_str())
            .bind(content.as_str())
            .bind(excerpt.as_str())
            .bind(slug.as_str())
            .bind(i64::from(author_id))
            .bind(cover_image.map(CoverImage::into_inner))
            .bind(tags.into_inner())
            .bind(created_at)
            .bind(updated_at)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Article::try_from(row)
    }

    async fn save(&self, article: &Article) -> DomainResult<Article> {
        let likes: Vec<i64> = article.likes.iter().copied().map(i64::from).collect();

        let sql = format!(
            "UPDATE articles
             SET title = $1, content = $2, excerpt = $3, slug = $4, tags = $5,
                 likes = $6, comments = $7, updated_at = $8
             WHERE id = $9
             RETURNING {ARTICLE_COLUMNS}"
        );

        let row = sqlx::query_as::<_, ArticleRow>(&sql)
            .bind(article.title.as_str())
            .bind(article.content.as_str())
            .bind(article.excerpt.as_str())
            .bind(article.slug.as_str())
            .bind(article.tags.as_slice())
            .bind(likes)
            .bind(comment_records(&article.comments))
            .bind(article.updated_at)
            .bind(i64::from(article.id))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::NotFound("article not found".into()))?;

        Article::try_from(row)
    }
}

#[async_trait]
impl ArticleReadRepository for PostgresArticleReadRepository {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        let sql = format!("SELECT {ARTICLE_COLUMNS} FROM articles WHERE id = $1");
        let row = sqlx::query_as::<_, ArticleRow>(&sql)
            .bind(i64::from(id))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Article::try_from).transpose()
    }

    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<Article>> {
        let sql = format!("SELECT {ARTICLE_COLUMNS} FROM articles WHERE slug = $1");
        let row = sqlx::query_as::<_, ArticleRow>(&sql)
            .bind(slug.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Article::try_from).transpose()
    }

    async fn list_newest_first(&self) -> DomainResult<Vec<Article>> {
        let sql = format!("SELECT {ARTICLE_COLUMNS} FROM articles ORDER BY created_at DESC, id DESC");
        let rows = sqlx::query_as::<_, ArticleRow>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(Article::try_from).collect()
    }
}
