// tests/support/mocks/lookup.rs
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use mokkan_slug::domain::errors::{DomainError, DomainResult};
use mokkan_slug::domain::slug::{RecordId, Slug, SlugLookup};
use tokio::sync::Barrier;

/// Lookup whose backing store is unreachable.
pub struct FailingLookup;

#[async_trait]
impl SlugLookup for FailingLookup {
    async fn exists_conflict(
        &self,
        _slug: &Slug,
        _exclude: Option<RecordId>,
    ) -> DomainResult<bool> {
        Err(DomainError::LookupFailure("connection refused".into()))
    }
}

/// Delegates to `inner` and records how many probes were issued.
pub struct CountingLookup {
    inner: Arc<dyn SlugLookup>,
    calls: AtomicUsize,
}

impl CountingLookup {
    pub fn new(inner: Arc<dyn SlugLookup>) -> Self {
        Self {
            inner,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SlugLookup for CountingLookup {
    async fn exists_conflict(
        &self,
        slug: &Slug,
        exclude: Option<RecordId>,
    ) -> DomainResult<bool> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.exists_conflict(slug, exclude).await
    }
}

/// Holds every probe result until `parties` probes have been answered, so
/// concurrent resolutions all observe the store before any of them writes.
pub struct RendezvousLookup {
    inner: Arc<dyn SlugLookup>,
    barrier: Barrier,
}

impl RendezvousLookup {
    pub fn new(inner: Arc<dyn SlugLookup>, parties: usize) -> Self {
        Self {
            inner,
            barrier: Barrier::new(parties),
        }
    }
}

#[async_trait]
impl SlugLookup for RendezvousLookup {
    async fn exists_conflict(
        &self,
        slug: &Slug,
        exclude: Option<RecordId>,
    ) -> DomainResult<bool> {
        let answer = self.inner.exists_conflict(slug, exclude).await;
        self.barrier.wait().await;
        answer
    }
}
