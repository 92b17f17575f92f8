use super::map_lookup;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::slug::value_objects::is_plain_identifier;
use crate::domain::slug::{RecordId, Slug, SlugColumn, SlugLookup};
use async_trait::async_trait;
use sqlx::SqlitePool;

/// Slug existence check against any SQLite table with an integer `id` column.
#[derive(Clone)]
pub struct SqliteSlugLookup {
    pool: SqlitePool,
    exists_sql: String,
}

impl SqliteSlugLookup {
    pub fn new(pool: SqlitePool, table: &str, column: &SlugColumn) -> DomainResult<Self> {
        if !is_plain_identifier(table) {
            return Err(DomainError::Validation(format!(
                "table `{table}` must be a plain identifier"
            )));
        }

        let exists_sql = format!(
            "SELECT EXISTS(SELECT 1 FROM \"{table}\" WHERE \"{column}\" = ?1 AND (?2 IS NULL OR id <> ?2))"
        );
        Ok(Self { pool, exists_sql })
    }

    pub fn for_articles(pool: SqlitePool, column: &SlugColumn) -> DomainResult<Self> {
        Self::new(pool, "articles", column)
    }
}

#[async_trait]
impl SlugLookup for SqliteSlugLookup {
    async fn exists_conflict(
        &self,
        slug: &Slug,
        exclude_id: Option<RecordId>,
    ) -> DomainResult<bool> {
        let exists: i64 = sqlx::query_scalar(&self.exists_sql)
            .bind(slug.as_str())
            .bind(exclude_id.map(i64::from))
            .fetch_one(&self.pool)
            .await
            .map_err(map_lookup)?;

        Ok(exists != 0)
    }
}
