use crate::domain::slug::SlugColumn;
use sqlx::{SqlitePool, sqlite::SqlitePoolOptions};

pub async fn init_pool(database_url: &str, max_connections: u32) -> Result<SqlitePool, sqlx::Error> {
    // every connection to an in-memory url opens a separate, empty database
    let in_memory = database_url.contains(":memory:");

    let mut options = SqlitePoolOptions::new();
    if in_memory {
        options = options
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None);
    } else {
        options = options.max_connections(max_connections);
    }

    options.connect(database_url).await
}

/// Create the `articles` collection with its slug stored in `column`.
///
/// The unique index on the slug column is what ultimately rejects two writers
/// that resolved the same slug concurrently.
pub async fn ensure_article_schema(pool: &SqlitePool, column: &SlugColumn) -> Result<(), sqlx::Error> {
    let create_table = format!(
        "CREATE TABLE IF NOT EXISTS articles (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL,
            \"{column}\" TEXT NOT NULL,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        )"
    );
    sqlx::query(&create_table).execute(pool).await?;

    let create_index = format!(
        "CREATE UNIQUE INDEX IF NOT EXISTS \"articles_{column}_key\" ON articles (\"{column}\")"
    );
    sqlx::query(&create_index).execute(pool).await?;

    tracing::debug!(%column, "article schema ready");
    Ok(())
}
