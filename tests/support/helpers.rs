// tests/support/helpers.rs
use std::sync::Arc;

use chrono::Utc;
use mokkan_slug::application::services::ApplicationServices;
use mokkan_slug::config::SlugSettings;
use mokkan_slug::domain::article::{
    Article, ArticleReadRepository, ArticleTitle, ArticleWriteRepository, NewArticle,
};
use mokkan_slug::domain::slug::{Slug, SlugLookup};
use mokkan_slug::infrastructure::repositories::InMemoryArticleStore;
use mokkan_slug::infrastructure::util::DefaultSlugGenerator;

use super::mocks::DummyClock;

/// Wire the application services over `store`, probing slugs through `lookup`.
pub fn build_services(
    store: Arc<InMemoryArticleStore>,
    lookup: Arc<dyn SlugLookup>,
    settings: &SlugSettings,
) -> ApplicationServices {
    mokkan_slug::telemetry::init_tracing();

    let write: Arc<dyn ArticleWriteRepository> = store.clone();
    let read: Arc<dyn ArticleReadRepository> = store;
    ApplicationServices::new(
        write,
        read,
        lookup,
        Arc::new(DummyClock),
        Arc::new(DefaultSlugGenerator),
        settings,
    )
}

/// Services whose slug lookup is the store itself.
pub fn in_memory_services(store: Arc<InMemoryArticleStore>) -> ApplicationServices {
    let lookup: Arc<dyn SlugLookup> = store.clone();
    build_services(store, lookup, &SlugSettings::default())
}

/// Insert an article with a fixed slug, bypassing resolution.
pub async fn seed(store: &InMemoryArticleStore, title: &str, slug: &str) -> Article {
    let article =
        NewArticle::new(ArticleTitle::new(title), Utc::now()).with_slug(Slug::new(slug));
    store.insert(article).await.expect("seed article")
}
