use super::map_sqlx;
use crate::domain::article::{
    Article, ArticleReadRepository, ArticleTitle, ArticleUpdate, ArticleWriteRepository,
    NewArticle,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::slug::{RecordId, Slug, SlugColumn};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, QueryBuilder, Sqlite, SqlitePool};

fn returning_columns(column: &SlugColumn) -> String {
    format!("id, title, \"{column}\" AS slug, created_at, updated_at")
}

#[derive(Clone)]
pub struct SqliteArticleWriteRepository {
    pool: SqlitePool,
    column: SlugColumn,
}

impl SqliteArticleWriteRepository {
    pub fn new(pool: SqlitePool, column: SlugColumn) -> Self {
        Self { pool, column }
    }
}

#[derive(Clone)]
pub struct SqliteArticleReadRepository {
    pool: SqlitePool,
    by_id_sql: String,
    by_slug_sql: String,
}

impl SqliteArticleReadRepository {
    pub fn new(pool: SqlitePool, column: &SlugColumn) -> Self {
        let select = format!("SELECT {} FROM articles", returning_columns(column));
        Self {
            pool,
            by_id_sql: format!("{select} WHERE id = ?"),
            by_slug_sql: format!("{select} WHERE \"{column}\" = ?"),
        }
    }
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    id: i64,
    title: String,
    slug: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ArticleRow> for Article {
    type Error = DomainError;

    fn try_from(row: ArticleRow) -> Result<Self, Self::Error> {
        Ok(Article {
            id: RecordId::new(row.id)?,
            title: ArticleTitle::new(row.title),
            slug: Slug::new(row.slug),
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl ArticleWriteRepository for SqliteArticleWriteRepository {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let NewArticle {
            title,
            slug,
            created_at,
            updated_at,
        } = article;

        let sql = format!(
            "INSERT INTO articles (title, \"{}\", created_at, updated_at) VALUES (?, ?, ?, ?) RETURNING {}",
            self.column,
            returning_columns(&self.column)
        );

        let row = sqlx::query_as::<_, ArticleRow>(&sql)
            .bind(title.as_str())
            .bind(slug.as_str())
            .bind(created_at)
            .bind(updated_at)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Article::try_from(row)
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article> {
        let ArticleUpdate {
            id,
            title,
            slug,
            updated_at,
        } = update;

        let mut builder: QueryBuilder<Sqlite> =
            QueryBuilder::new("UPDATE articles SET updated_at = ");
        builder.push_bind(updated_at);

        if let Some(title) = title {
            builder.push(", title = ");
            builder.push_bind(title.into_inner());
        }

        if let Some(slug) = slug {
            builder.push(format!(", \"{}\" = ", self.column));
            builder.push_bind(slug.into_inner());
        }

        builder.push(" WHERE id = ");
        builder.push_bind(i64::from(id));
        builder.push(" RETURNING ");
        builder.push(returning_columns(&self.column));

        let row = builder
            .build_query_as::<ArticleRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::NotFound("article not found".into()))?;

        Article::try_from(row)
    }
}

#[async_trait]
impl ArticleReadRepository for SqliteArticleReadRepository {
    async fn find_by_id(&self, id: RecordId) -> DomainResult<Option<Article>> {
        let row = sqlx::query_as::<_, ArticleRow>(&self.by_id_sql)
            .bind(i64::from(id))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Article::try_from).transpose()
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Article>> {
        let row = sqlx::query_as::<_, ArticleRow>(&self.by_slug_sql)
            .bind(slug.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Article::try_from).transpose()
    }
}
