use std::sync::Arc;

use super::resolver::SlugResolver;
use crate::domain::errors::DomainResult;
use crate::domain::slug::sluggable::Sluggable;

/// Create/update hooks that keep a record's slug in step with its source attribute.
pub struct SlugLifecycle {
    resolver: Arc<SlugResolver>,
}

impl SlugLifecycle {
    pub fn new(resolver: Arc<SlugResolver>) -> Self {
        Self { resolver }
    }

    /// Run before a record is first persisted. Always assigns a fresh slug.
    pub async fn creating<R>(&self, record: &mut R) -> DomainResult<()>
    where
        R: Sluggable + Send + Sync + ?Sized,
    {
        let slug = self.resolver.resolve(record.slug_source(), None).await?;
        record.set_slug(slug);
        Ok(())
    }

    /// Run before an existing record is persisted again.
    ///
    /// The slug is only regenerated when the normalized source no longer
    /// matches the stored slug. Returns whether the slug was regenerated.
    pub async fn updating<R>(&self, record: &mut R) -> DomainResult<bool>
    where
        R: Sluggable + Send + Sync + ?Sized,
    {
        let normalized = self.resolver.normalize(record.slug_source());
        if &normalized == record.slug() {
            tracing::debug!(slug = %normalized, "slug unchanged");
            return Ok(false);
        }

        let slug = self
            .resolver
            .resolve(record.slug_source(), record.record_id())
            .await?;
        tracing::debug!(
            record_id = ?record.record_id(),
            previous = %record.slug(),
            slug = %slug,
            "slug regenerated"
        );
        record.set_slug(slug);
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::DomainError;
    use crate::domain::slug::repository::SlugLookup;
    use crate::domain::slug::value_objects::{RecordId, Slug};
    use crate::infrastructure::util::DefaultSlugGenerator;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct Page {
        id: Option<RecordId>,
        heading: String,
        slug: Slug,
    }

    impl Sluggable for Page {
        fn record_id(&self) -> Option<RecordId> {
            self.id
        }

        fn slug_source(&self) -> &str {
            &self.heading
        }

        fn slug(&self) -> &Slug {
            &self.slug
        }

        fn set_slug(&mut self, slug: Slug) {
            self.slug = slug;
        }
    }

    #[derive(Default)]
    struct CountingLookup {
        rows: HashMap<String, i64>,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl SlugLookup for CountingLookup {
        async fn exists_conflict(
            &self,
            slug: &Slug,
            exclude_id: Option<RecordId>,
        ) -> DomainResult<bool> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self
                .rows
                .get(slug.as_str())
                .is_some_and(|owner| exclude_id.map(i64::from) != Some(*owner)))
        }
    }

    struct BrokenLookup;

    #[async_trait]
    impl SlugLookup for BrokenLookup {
        async fn exists_conflict(&self, _: &Slug, _: Option<RecordId>) -> DomainResult<bool> {
            Err(DomainError::LookupFailure("connection reset".into()))
        }
    }

    fn lifecycle(lookup: Arc<dyn SlugLookup>) -> SlugLifecycle {
        let resolver = SlugResolver::new(lookup, Arc::new(DefaultSlugGenerator));
        SlugLifecycle::new(Arc::new(resolver))
    }

    fn lookup_with(rows: &[(i64, &str)]) -> Arc<CountingLookup> {
        Arc::new(CountingLookup {
            rows: rows.iter().map(|(id, s)| (s.to_string(), *id)).collect(),
            calls: AtomicUsize::new(0),
        })
    }

    #[tokio::test]
    async fn creating_assigns_resolved_slug() {
        let lookup = lookup_with(&[(1, "about-us")]);
        let mut page = Page {
            id: None,
            heading: "About Us".into(),
            slug: Slug::default(),
        };

        lifecycle(lookup).creating(&mut page).await.unwrap();
        assert_eq!(page.slug, "about-us-1");
    }

    #[tokio::test]
    async fn updating_with_matching_source_skips_resolution() {
        let lookup = lookup_with(&[(1, "about-us")]);
        let mut page = Page {
            id: Some(RecordId(1)),
            heading: "About   us!".into(),
            slug: Slug::new("about-us"),
        };

        let changed = lifecycle(lookup.clone()).updating(&mut page).await.unwrap();
        assert!(!changed);
        assert_eq!(page.slug, "about-us");
        assert_eq!(lookup.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn updating_with_new_source_excludes_own_id() {
        let lookup = lookup_with(&[(1, "about-us"), (2, "contact")]);
        let mut page = Page {
            id: Some(RecordId(1)),
            heading: "Contact".into(),
            slug: Slug::new("about-us"),
        };

        let changed = lifecycle(lookup).updating(&mut page).await.unwrap();
        assert!(changed);
        assert_eq!(page.slug, "contact-1");
    }

    #[tokio::test]
    async fn updating_keeps_suffixed_slug_owned_by_the_record() {
        let lookup = lookup_with(&[(1, "faq"), (2, "faq-1")]);
        let mut page = Page {
            id: Some(RecordId(2)),
            heading: "FAQ".into(),
            slug: Slug::new("faq-1"),
        };

        let changed = lifecycle(lookup).updating(&mut page).await.unwrap();
        assert!(changed);
        assert_eq!(page.slug, "faq-1");
    }

    #[tokio::test]
    async fn failed_lookup_leaves_slug_untouched() {
        let mut page = Page {
            id: Some(RecordId(4)),
            heading: "Pricing".into(),
            slug: Slug::new("plans"),
        };

        let err = lifecycle(Arc::new(BrokenLookup))
            .updating(&mut page)
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::LookupFailure(_)));
        assert_eq!(page.slug, "plans");
    }
}
