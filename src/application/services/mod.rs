// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::articles::ArticleCommandService,
        ports::{ClockPort, SlugGeneratorPort},
        queries::articles::ArticleQueryService,
    },
    config::SlugSettings,
    domain::{
        article::{ArticleReadRepository, ArticleWriteRepository},
        slug::{SlugLifecycle, SlugLookup, SlugResolver},
    },
};

pub struct ApplicationServices {
    pub article_commands: Arc<ArticleCommandService>,
    pub article_queries: Arc<ArticleQueryService>,
    slug_resolver: Arc<SlugResolver>,
}

impl ApplicationServices {
    pub fn new(
        article_write_repo: Arc<dyn ArticleWriteRepository>,
        article_read_repo: Arc<dyn ArticleReadRepository>,
        slug_lookup: Arc<dyn SlugLookup>,
        clock: Arc<ClockPort>,
        slugger: Arc<SlugGeneratorPort>,
        settings: &SlugSettings,
    ) -> Self {
        let slug_resolver = Arc::new(
            SlugResolver::new(Arc::clone(&slug_lookup), Arc::clone(&slugger))
                .with_max_attempts(settings.max_attempts()),
        );
        let slug_lifecycle = Arc::new(SlugLifecycle::new(Arc::clone(&slug_resolver)));

        let article_commands = Arc::new(ArticleCommandService::new(
            Arc::clone(&article_write_repo),
            Arc::clone(&article_read_repo),
            Arc::clone(&slug_lifecycle),
            Arc::clone(&clock),
        ));

        let article_queries = Arc::new(ArticleQueryService::new(Arc::clone(&article_read_repo)));

        Self {
            article_commands,
            article_queries,
            slug_resolver,
        }
    }

    /// Resolver shared by the article hooks, for callers that need a slug
    /// without creating a record.
    pub fn slug_resolver(&self) -> Arc<SlugResolver> {
        Arc::clone(&self.slug_resolver)
    }
}
