use crate::domain::article::Article;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::serde_time;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleDto {
    pub id: i64,
    pub title: String,
    pub slug: String,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "serde_time")]
    pub updated_at: DateTime<Utc>,
}

impl From<Article> for ArticleDto {
    fn from(article: Article) -> Self {
        Self {
            id: article.id.into(),
            title: article.title.into_inner(),
            slug: article.slug.into_inner(),
            created_at: article.created_at,
            updated_at: article.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::article::ArticleTitle;
    use crate::domain::slug::{RecordId, Slug};

    #[test]
    fn timestamps_serialize_as_rfc3339() {
        let at = DateTime::parse_from_rfc3339("2024-01-01T00:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        let dto = ArticleDto::from(Article {
            id: RecordId(9),
            title: ArticleTitle::new("Hello World!"),
            slug: Slug::new("hello-world"),
            created_at: at,
            updated_at: at,
        });

        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json["slug"], "hello-world");
        assert_eq!(json["created_at"], "2024-01-01T00:00:00+00:00");

        let back: ArticleDto = serde_json::from_value(json).unwrap();
        assert_eq!(back, dto);
    }
}
