// src/application/population.rs
//! Expands stored user references into public profile fields after the
//! primary read. One batched user lookup per response.
use std::{collections::HashMap, sync::Arc};

use crate::{
    application::{
        dto::{ArticleDto, AuthorDto, CommentDto},
        error::ApplicationResult,
    },
    domain::{
        article::{Article, Comment},
        user::{User, UserId, UserRepository},
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileFields {
    /// username and avatar
    Summary,
    /// username, avatar and bio
    WithBio,
}

/// Which references of an article get expanded.
#[derive(Debug, Clone, Copy)]
pub struct ArticleView {
    pub author: ProfileFields,
    /// `None` leaves comment authors as bare references.
    pub comment_authors: Option<ProfileFields>,
}

impl ArticleView {
    pub const SUMMARY: Self = Self {
        author: ProfileFields::Summary,
        comment_authors: None,
    };

    pub const DETAIL: Self = Self {
        author: ProfileFields::WithBio,
        comment_authors: Some(ProfileFields::Summary),
    };
}

#[derive(Debug, Default)]
pub struct ResolvedProfiles {
    users: HashMap<UserId, User>,
}

impl ResolvedProfiles {
    pub fn author(&self, id: UserId, fields: ProfileFields) -> AuthorDto {
        let Some(user) = self.users.get(&id) else {
            return AuthorDto::reference(id);
        };

        AuthorDto {
            id: id.into(),
            username: Some(user.username.to_string()),
            avatar: user.avatar.clone(),
            bio: match fields {
                ProfileFields::WithBio => user.bio.clone(),
                ProfileFields::Summary => None,
            },
        }
    }

    pub fn comments(&self, comments: Vec<Comment>, fields: Option<ProfileFields>) -> Vec<CommentDto> {
        comments
            .into_iter()
            .map(|comment| CommentDto {
                author: match fields {
                    Some(fields) => self.author(comment.author_id, fields),
                    None => AuthorDto::reference(comment.author_id),
                },
                content: comment.text.into_inner(),
                created_at: comment.created_at,
            })
            .collect()
    }

    pub fn article(&self, mut article: Article, view: ArticleView) -> ArticleDto {
        let author = self.author(article.author_id, view.author);
        let comments = self.comments(std::mem::take(&mut article.comments), view.comment_authors);
        ArticleDto::from_parts(article, author, comments)
    }
}

pub struct ProfileResolver {
    user_repo: Arc<dyn UserRepository>,
}

impl ProfileResolver {
    pub fn new(user_repo: Arc<dyn UserRepository>) -> Self {
        Self { user_repo }
    }

    pub async fn resolve<I>(&self, ids: I) -> ApplicationResult<ResolvedProfiles>
    where
        I: IntoIterator<Item = UserId>,
    {
        let mut ids: Vec<UserId> = ids.into_iter().collect();
        ids.sort_unstable();
        ids.dedup();
        if ids.is_empty() {
            return Ok(ResolvedProfiles::default());
        }

        let users = self.user_repo.find_many(&ids).await?;
        Ok(ResolvedProfiles {
            users: users.into_iter().map(|user| (user.id, user)).collect(),
        })
    }

    pub async fn populate_article(
        &self,
        article: Article,
        view: ArticleView,
    ) -> ApplicationResult<ArticleDto> {
        let profiles = self.resolve(referenced_users(&article, view)).await?;
        Ok(profiles.article(article, view))
    }

    pub async fn populate_articles(
        &self,
        articles: Vec<Article>,
        view: ArticleView,
    ) -> ApplicationResult<Vec<ArticleDto>> {
        let ids: Vec<UserId> = articles
            .iter()
            .flat_map(|article| referenced_users(article, view))
            .collect();
        let profiles = self.resolve(ids).await?;
        Ok(articles
            .into_iter()
            .map(|article| profiles.article(article, view))
            .collect())
    }

    pub async fn populate_comments(
        &self,
        comments: Vec<Comment>,
        fields: ProfileFields,
    ) -> ApplicationResult<Vec<CommentDto>> {
        let profiles = self
            .resolve(comments.iter().map(|comment| comment.author_id))
            .await?;
        Ok(profiles.comments(comments, Some(fields)))
    }
}

fn referenced_users(article: &Article, view: ArticleView) -> Vec<UserId> {
    let mut ids = vec![article.author_id];
    if view.comment_authors.is_some() {
        ids.extend(article.comments.iter().map(|comment| comment.author_id));
    }
    ids
}
