// src/presentation/http/controllers/articles.rs
use crate::application::{
    commands::articles::{
        AddCommentCommand, CreateArticleCommand, ToggleLikeCommand, UpdateArticleCommand,
    },
    dto::{ArticleDto, CommentDto, LikesDto, TagsInput},
    error::ApplicationError,
    queries::articles::GetArticleBySlugQuery,
};
use crate::presentation::http::error::{ErrorResponse, HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{Authenticated, JsonBody};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path, http::StatusCode};
use serde::Deserialize;
use utoipa::ToSchema;

/// Clients may also send `author`; it is ignored in favour of the caller.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateArticleRequest {
    pub title: String,
    pub content: String,
    pub excerpt: String,
    #[serde(default)]
    pub tags: TagsInput,
    #[serde(default)]
    pub cover_image: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateArticleRequest {
    pub title: String,
    pub content: String,
    pub excerpt: String,
    #[serde(default)]
    pub tags: TagsInput,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CommentRequest {
    pub content: String,
}

/// Non-numeric ids cannot name an article.
fn article_id(raw: &str) -> HttpResult<i64> {
    raw.parse::<i64>()
        .map_err(|_| HttpError::from_error(ApplicationError::article_not_found()))
}

#[utoipa::path(
    get,
    path = "/api/articles",
    responses(
        (status = 200, description = "All articles, newest first.", body = [ArticleDto]),
        (status = 500, description = "Storage failure.", body = ErrorResponse)
    ),
    security(()),
    tag = "Articles"
)]
pub async fn list_articles(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<Vec<ArticleDto>>> {
    state
        .services
        .article_queries
        .list_articles()
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/articles/{slug}",
    params(("slug" = String, Path, description = "Article slug")),
    responses(
        (status = 200, description = "Article with author bio and comment authors.", body = ArticleDto),
        (status = 404, description = "No article has this slug.", body = ErrorResponse)
    ),
    security(()),
    tag = "Articles"
)]
pub async fn get_article_by_slug(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<Json<ArticleDto>> {
    state
        .services
        .article_queries
        .get_article_by_slug(GetArticleBySlugQuery { slug })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/articles",
    request_body = CreateArticleRequest,
    responses(
        (status = 201, description = "Article created.", body = ArticleDto),
        (status = 400, description = "Invalid fields or cover image.", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token.", body = ErrorResponse),
        (status = 500, description = "Slug already in use or storage failure.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn create_article(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    JsonBody(payload): JsonBody<CreateArticleRequest>,
) -> HttpResult<(StatusCode, Json<ArticleDto>)> {
    let command = CreateArticleCommand {
        title: payload.title,
        content: payload.content,
        excerpt: payload.excerpt,
        tags: payload.tags,
        cover_image: payload.cover_image,
    };

    let article = state
        .services
        .article_commands
        .create_article(&user, command)
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(article)))
}

#[utoipa::path(
    put,
    path = "/api/articles/{id}",
    params(("id" = i64, Path, description = "Article id")),
    request_body = UpdateArticleRequest,
    responses(
        (status = 200, description = "Article updated.", body = ArticleDto),
        (status = 400, description = "Malformed body or invalid fields.", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token.", body = ErrorResponse),
        (status = 403, description = "Caller is not the author.", body = ErrorResponse),
        (status = 404, description = "Article not found.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn update_article(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<String>,
    JsonBody(payload): JsonBody<UpdateArticleRequest>,
) -> HttpResult<Json<ArticleDto>> {
    let command = UpdateArticleCommand {
        id: article_id(&id)?,
        title: payload.title,
        content: payload.content,
        excerpt: payload.excerpt,
        tags: payload.tags,
    };

    state
        .services
        .article_commands
        .update_article(&user, command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/articles/{id}/like",
    params(("id" = i64, Path, description = "Article id")),
    responses(
        (status = 200, description = "Updated list of liking users.", body = LikesDto),
        (status = 401, description = "Missing or invalid token.", body = ErrorResponse),
        (status = 404, description = "Article not found.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn toggle_like(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<String>,
) -> HttpResult<Json<LikesDto>> {
    let command = ToggleLikeCommand {
        id: article_id(&id)?,
    };

    state
        .services
        .article_commands
        .toggle_like(&user, command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/articles/{id}/comments",
    params(("id" = i64, Path, description = "Article id")),
    request_body = CommentRequest,
    responses(
        (status = 200, description = "Full comment list with commenter profiles.", body = [CommentDto]),
        (status = 400, description = "Empty comment.", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token.", body = ErrorResponse),
        (status = 404, description = "Article not found.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn add_comment(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<String>,
    JsonBody(payload): JsonBody<CommentRequest>,
) -> HttpResult<Json<Vec<CommentDto>>> {
    let command = AddCommentCommand {
        id: article_id(&id)?,
        content: payload.content,
    };

    state
        .services
        .article_commands
        .add_comment(&user, command)
        .await
        .into_http()
        .map(Json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_request_accepts_encoded_tags_and_ignores_author() {
        let payload: CreateArticleRequest = serde_json::from_str(
            r#"{"title":"T","content":"C","excerpt":"E","tags":"[\"a\"]","author":"42"}"#,
        )
        .unwrap();
        assert_eq!(payload.tags.into_tags().unwrap().as_slice(), ["a"]);
        assert!(payload.cover_image.is_none());
    }

    #[test]
    fn non_numeric_id_is_not_found() {
        let err = article_id("abc").unwrap_err();
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
    }
}
