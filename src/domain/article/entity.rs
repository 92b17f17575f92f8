// src/domain/article/entity.rs
use crate::domain::article::value_objects::ArticleTitle;
use crate::domain::slug::{RecordId, Slug, Sluggable};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Article {
    pub id: RecordId,
    pub title: ArticleTitle,
    pub slug: Slug,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Article {
    pub fn set_title(&mut self, title: ArticleTitle, now: DateTime<Utc>) {
        self.title = title;
        self.updated_at = now;
    }
}

impl Sluggable for Article {
    fn record_id(&self) -> Option<RecordId> {
        Some(self.id)
    }

    fn slug_source(&self) -> &str {
        self.title.as_str()
    }

    fn slug(&self) -> &Slug {
        &self.slug
    }

    fn set_slug(&mut self, slug: Slug) {
        self.slug = slug;
    }
}

/// An article that has not been stored yet. Its slug is assigned by the
/// creating hook right before insertion.
#[derive(Debug, Clone)]
pub struct NewArticle {
    pub title: ArticleTitle,
    pub slug: Slug,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl NewArticle {
    pub fn new(title: ArticleTitle, now: DateTime<Utc>) -> Self {
        Self {
            title,
            slug: Slug::default(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_slug(mut self, slug: Slug) -> Self {
        self.slug = slug;
        self
    }
}

impl Sluggable for NewArticle {
    fn record_id(&self) -> Option<RecordId> {
        None
    }

    fn slug_source(&self) -> &str {
        self.title.as_str()
    }

    fn slug(&self) -> &Slug {
        &self.slug
    }

    fn set_slug(&mut self, slug: Slug) {
        self.slug = slug;
    }
}

#[derive(Debug, Clone)]
pub struct ArticleUpdate {
    pub id: RecordId,
    pub title: Option<ArticleTitle>,
    pub slug: Option<Slug>,
    pub updated_at: DateTime<Utc>,
}

impl ArticleUpdate {
    pub fn new(id: RecordId, updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: None,
            slug: None,
            updated_at,
        }
    }

    pub fn with_title(mut self, title: ArticleTitle) -> Self {
        self.title = Some(title);
        self
    }

    pub fn with_slug(mut self, slug: Slug) -> Self {
        self.slug = Some(slug);
        self
    }
}
