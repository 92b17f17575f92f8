// src/infrastructure/repositories/mod.rs
mod error;
mod memory_article;
mod sqlite_article;
mod sqlite_slug_lookup;

pub use error::{map_lookup, map_sqlx};
pub use memory_article::InMemoryArticleStore;
pub use sqlite_article::{SqliteArticleReadRepository, SqliteArticleWriteRepository};
pub use sqlite_slug_lookup::SqliteSlugLookup;
