use crate::domain::errors::DomainError;

/// Map a failed write or read. Unique-index violations can only come from the
/// slug column, so they surface as a slug conflict.
pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
            DomainError::Conflict("slug already exists".into())
        }
        sqlx::Error::Database(db_err) => DomainError::Persistence(db_err.message().to_string()),
        _ => DomainError::Persistence(err.to_string()),
    }
}

/// Map a failed slug existence check.
pub fn map_lookup(err: sqlx::Error) -> DomainError {
    DomainError::LookupFailure(err.to_string())
}
