use crate::domain::article::{
    Article, ArticleReadRepository, ArticleUpdate, ArticleWriteRepository, NewArticle,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::slug::{RecordId, Slug, SlugLookup};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

#[derive(Default)]
struct StoreState {
    articles: BTreeMap<i64, Article>,
    last_id: i64,
}

impl StoreState {
    fn slug_owner(&self, slug: &Slug) -> Option<RecordId> {
        self.articles
            .values()
            .find(|article| &article.slug == slug)
            .map(|article| article.id)
    }
}

/// Process-local article collection. Writes reject duplicate slugs the way a
/// unique index would.
#[derive(Default)]
pub struct InMemoryArticleStore {
    state: Mutex<StoreState>,
}

impl InMemoryArticleStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self) -> DomainResult<usize> {
        Ok(self.lock()?.articles.len())
    }

    fn lock(&self) -> DomainResult<MutexGuard<'_, StoreState>> {
        self.state
            .lock()
            .map_err(|_| DomainError::Persistence("article store lock poisoned".into()))
    }
}

#[async_trait]
impl ArticleWriteRepository for InMemoryArticleStore {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let mut state = self.lock()?;
        if state.slug_owner(&article.slug).is_some() {
            return Err(DomainError::Conflict("slug already exists".into()));
        }

        state.last_id += 1;
        let id = state.last_id;
        let created = Article {
            id: RecordId(id),
            title: article.title,
            slug: article.slug,
            created_at: article.created_at,
            updated_at: article.updated_at,
        };
        state.articles.insert(id, created.clone());
        Ok(created)
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article> {
        let mut state = self.lock()?;

        if let Some(slug) = &update.slug {
            if state.slug_owner(slug).is_some_and(|owner| owner != update.id) {
                return Err(DomainError::Conflict("slug already exists".into()));
            }
        }

        let article = state
            .articles
            .get_mut(&i64::from(update.id))
            .ok_or_else(|| DomainError::NotFound("article not found".into()))?;

        if let Some(title) = update.title {
            article.title = title;
        }
        if let Some(slug) = update.slug {
            article.slug = slug;
        }
        article.updated_at = update.updated_at;

        Ok(article.clone())
    }
}

#[async_trait]
impl ArticleReadRepository for InMemoryArticleStore {
    async fn find_by_id(&self, id: RecordId) -> DomainResult<Option<Article>> {
        Ok(self.lock()?.articles.get(&i64::from(id)).cloned())
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Article>> {
        let state = self.lock()?;
        Ok(state
            .slug_owner(slug)
            .and_then(|id| state.articles.get(&i64::from(id)).cloned()))
    }
}

#[async_trait]
impl SlugLookup for InMemoryArticleStore {
    async fn exists_conflict(
        &self,
        slug: &Slug,
        exclude_id: Option<RecordId>,
    ) -> DomainResult<bool> {
        let state = self
            .state
            .lock()
            .map_err(|_| DomainError::LookupFailure("article store lock poisoned".into()))?;

        Ok(state
            .articles
            .values()
            .any(|article| &article.slug == slug && Some(article.id) != exclude_id))
    }
}
