// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::articles::ArticleCommandService, queries::articles::ArticleQueryService,
    },
    domain::article::{ArticleReadRepository, ArticleWriteRepository},
};

/// The fully wired application layer: one command service and one query
/// service sharing the injected repositories.
pub struct ApplicationServices {
    pub article_commands: Arc<ArticleCommandService>,
    pub article_queries: Arc<ArticleQueryService>,
}

impl ApplicationServices {
    pub fn new(
        write_repo: Arc<dyn ArticleWriteRepository>,
        read_repo: Arc<dyn ArticleReadRepository>,
    ) -> Self {
        let article_commands = Arc::new(ArticleCommandService::new(
            Arc::clone(&write_repo),
            Arc::clone(&read_repo),
        ));
        let article_queries = Arc::new(ArticleQueryService::new(Arc::clone(&read_repo)));

        Self {
            article_commands,
            article_queries,
        }
    }
}
