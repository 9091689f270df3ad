// src/application/commands/articles/service.rs
use std::sync::Arc;

use crate::{
    application::{
        error::{ApplicationError, ApplicationResult},
        population::ProfileResolver,
        ports::{time::Clock, util::SlugGenerator},
    },
    domain::article::{
        Article, ArticleId, ArticleReadRepository, ArticleSlug, ArticleTitle,
        ArticleWriteRepository,
    },
};

pub struct ArticleCommandService {
    pub(super) write_repo: Arc<dyn ArticleWriteRepository>,
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) profiles: Arc<ProfileResolver>,
    pub(super) slugger: Arc<dyn SlugGenerator>,
    pub(super) clock: Arc<dyn Clock>,
}

impl ArticleCommandService {
    pub fn new(
        write_repo: Arc<dyn ArticleWriteRepository>,
        read_repo: Arc<dyn ArticleReadRepository>,
        profiles: Arc<ProfileResolver>,
        slugger: Arc<dyn SlugGenerator>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            profiles,
            slugger,
            clock,
        }
    }

    /// Lowercase slug of the title. Collisions are left to the store's unique index.
    pub(super) fn derive_slug(&self, title: &ArticleTitle) -> ApplicationResult<ArticleSlug> {
        let slug = self.slugger.slugify(title.as_str()).to_lowercase();
        if slug.is_empty() {
            return Err(ApplicationError::validation(
                "title must contain at least one letter or digit",
            ));
        }
        Ok(ArticleSlug::new(slug)?)
    }

    pub(super) async fn load_article(&self, id: i64) -> ApplicationResult<Article> {
        let id = ArticleId::new(id).map_err(|_| ApplicationError::article_not_found())?;
        self.read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(ApplicationError::article_not_found)
    }
}
