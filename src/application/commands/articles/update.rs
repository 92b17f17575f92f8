// src/application/commands/articles/update.rs
use super::ArticleCommandService;
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        article::{ArticleTitle, ArticleUpdate},
        slug::RecordId,
    },
};

pub struct UpdateArticleCommand {
    pub id: i64,
    pub title: Option<String>,
}

impl ArticleCommandService {
    /// Applies a title change and regenerates the slug when the new title no
    /// longer normalizes to the stored one. An absent or unchanged title
    /// leaves the stored article untouched.
    pub async fn update_article(
        &self,
        command: UpdateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let id = RecordId::new(command.id)?;
        let mut article = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        let title = match command.title.map(ArticleTitle::new) {
            Some(title) if title != article.title => title,
            _ => return Ok(article.into()),
        };

        let now = self.clock.now();
        article.set_title(title.clone(), now);
        let mut update = ArticleUpdate::new(id, now).with_title(title);

        if self.slug_lifecycle.updating(&mut article).await? {
            update = update.with_slug(article.slug.clone());
        }

        let updated = self.write_repo.update(update).await?;
        tracing::info!(id = %updated.id, slug = %updated.slug, "article updated");
        Ok(updated.into())
    }
}
