use crate::domain::errors::DomainResult;
use crate::domain::slug::value_objects::{RecordId, Slug};
use async_trait::async_trait;

#[async_trait]
pub trait SlugLookup: Send + Sync {
    /// Whether a record other than `exclude_id` already holds `slug`.
    ///
    /// Failures surface as `DomainError::LookupFailure`.
    async fn exists_conflict(
        &self,
        slug: &Slug,
        exclude_id: Option<RecordId>,
    ) -> DomainResult<bool>;
}
