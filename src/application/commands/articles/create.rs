// src/application/commands/articles/create.rs
use super::ArticleCommandService;
use crate::{
    application::{dto::ArticleDto, error::ApplicationResult},
    domain::article::{ArticleTitle, NewArticle},
};

pub struct CreateArticleCommand {
    pub title: String,
}

impl CreateArticleCommand {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}

impl ArticleCommandService {
    /// Assigns a unique slug and stores the article. Nothing is written when
    /// slug resolution fails.
    pub async fn create_article(
        &self,
        command: CreateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let title = ArticleTitle::new(command.title);
        let mut new_article = NewArticle::new(title, self.clock.now());

        self.slug_lifecycle.creating(&mut new_article).await?;

        let created = self.write_repo.insert(new_article).await?;
        tracing::info!(id = %created.id, slug = %created.slug, "article created");
        Ok(created.into())
    }
}
