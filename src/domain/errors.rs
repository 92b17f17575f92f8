// src/domain/errors.rs
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("persistence error: {0}")]
    Persistence(String),
    /// The slug existence check could not be completed.
    #[error("slug lookup failed: {0}")]
    LookupFailure(String),
    #[error("no free slug derived from `{base}` after {attempts} attempts")]
    ResolutionExhausted { base: String, attempts: u64 },
}
