use std::sync::Arc;

use crate::{application::population::ProfileResolver, domain::article::ArticleReadRepository};

pub struct ArticleQueryService {
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) profiles: Arc<ProfileResolver>,
}

impl ArticleQueryService {
    pub fn new(read_repo: Arc<dyn ArticleReadRepository>, profiles: Arc<ProfileResolver>) -> Self {
        Self {
            read_repo,
            profiles,
        }
    }
}
