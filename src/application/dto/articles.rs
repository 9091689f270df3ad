use crate::domain::{
    article::{Article, ArticleTags},
    errors::DomainResult,
    user::UserId,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::serde_time;

/// A user reference, optionally expanded with public profile fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AuthorDto {
    pub id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
}

impl AuthorDto {
    /// Bare reference used when the user was not resolved.
    pub fn reference(id: UserId) -> Self {
        Self {
            id: id.into(),
            username: None,
            avatar: None,
            bio: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CommentDto {
    pub author: AuthorDto,
    pub content: String,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ArticleDto {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub excerpt: String,
    pub slug: String,
    pub author: AuthorDto,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,
    pub tags: Vec<String>,
    pub likes: Vec<i64>,
    pub comments: Vec<CommentDto>,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "serde_time")]
    pub updated_at: DateTime<Utc>,
}

impl ArticleDto {
    pub fn from_parts(article: Article, author: AuthorDto, comments: Vec<CommentDto>) -> Self {
        Self {
            id: article.id.into(),
            title: article.title.into_inner(),
            content: article.content.into_inner(),
            excerpt: article.excerpt.into_inner(),
            slug: article.slug.into_inner(),
            author,
            cover_image: article.cover_image.map(|image| image.into_inner()),
            tags: article.tags.into_inner(),
            likes: article.likes.into_iter().map(Into::into).collect(),
            comments,
            created_at: article.created_at,
            updated_at: article.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LikesDto {
    pub likes: Vec<i64>,
}

impl LikesDto {
    pub fn from_users(likes: &[UserId]) -> Self {
        Self {
            likes: likes.iter().copied().map(Into::into).collect(),
        }
    }
}

/// Tags as sent by clients: a JSON-encoded string such as `"[\"rust\"]"`,
/// or a plain array.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum TagsInput {
    Encoded(String),
    List(Vec<String>),
}

impl Default for TagsInput {
    fn default() -> Self {
        Self::List(Vec::new())
    }
}

impl TagsInput {
    pub fn into_tags(self) -> DomainResult<ArticleTags> {
        match self {
            Self::Encoded(encoded) => ArticleTags::from_encoded(&encoded),
            Self::List(tags) => Ok(ArticleTags::new(tags)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_input_accepts_both_shapes() {
        let encoded: TagsInput = serde_json::from_str(r#""[\"rust\",\"web\"]""#).unwrap();
        let list: TagsInput = serde_json::from_str(r#"["rust","web"]"#).unwrap();

        assert_eq!(encoded.into_tags().unwrap(), list.into_tags().unwrap());
    }

    #[test]
    fn unresolved_author_serialises_as_id_only() {
        let json = serde_json::to_value(AuthorDto::reference(UserId::new(9).unwrap())).unwrap();
        assert_eq!(json, serde_json::json!({ "id": 9 }));
    }
}
