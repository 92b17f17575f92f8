use std::num::NonZeroU64;
use std::sync::Arc;

use crate::application::ports::util::SlugGenerator;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::slug::repository::SlugLookup;
use crate::domain::slug::value_objects::{RecordId, Slug, SlugCandidate};

/// Domain service producing slugs that no sibling record holds yet.
///
/// Probes `base`, `base-1`, `base-2`, ... in order and returns the first value
/// the lookup reports as free. The result is only unique as of the last probe;
/// concurrent writers can still race to the same value, so the store's own
/// unique index remains the final authority.
///
/// Without a configured attempt cap the loop only ends once a free value is
/// found, which never happens against a lookup that always reports a conflict.
pub struct SlugResolver {
    lookup: Arc<dyn SlugLookup>,
    generator: Arc<dyn SlugGenerator>,
    max_attempts: Option<NonZeroU64>,
}

impl SlugResolver {
    pub fn new(lookup: Arc<dyn SlugLookup>, generator: Arc<dyn SlugGenerator>) -> Self {
        Self {
            lookup,
            generator,
            max_attempts: None,
        }
    }

    /// Abort with `ResolutionExhausted` after this many conflicting probes.
    pub fn with_max_attempts(mut self, max_attempts: Option<NonZeroU64>) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Base token for `source`, before any suffix is applied.
    pub fn normalize(&self, source: &str) -> Slug {
        Slug::new(self.generator.slugify(source))
    }

    pub async fn resolve(&self, source: &str, exclude_id: Option<RecordId>) -> DomainResult<Slug> {
        let mut candidate = SlugCandidate::new(self.generator.slugify(source));

        loop {
            let slug = candidate.to_slug();
            if !self.lookup.exists_conflict(&slug, exclude_id).await? {
                tracing::debug!(
                    slug = %slug,
                    attempts = candidate.attempt(),
                    exclude_id = ?exclude_id,
                    "resolved unique slug"
                );
                return Ok(slug);
            }

            tracing::debug!(slug = %slug, "slug already taken");

            if let Some(limit) = self.max_attempts {
                if candidate.attempt() >= limit.get() {
                    tracing::warn!(
                        base = candidate.base(),
                        attempts = candidate.attempt(),
                        "slug resolution exhausted"
                    );
                    return Err(DomainError::ResolutionExhausted {
                        base: candidate.base().to_string(),
                        attempts: candidate.attempt(),
                    });
                }
            }

            candidate = candidate.next();
        }
    }
}
