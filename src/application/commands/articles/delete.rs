// src/application/commands/articles/delete.rs
use super::ArticleCommandService;
use crate::{application::error::ApplicationResult, domain::article::ArticleId};

pub struct DeleteArticleCommand {
    pub id: i64,
}

impl ArticleCommandService {
    /// Removes the article. A repeat delete of the same id reports
    /// not-found; the repository signals when nothing was removed.
    pub async fn delete_article(&self, command: DeleteArticleCommand) -> ApplicationResult<()> {
        let id = ArticleId::new(command.id)?;
        self.write_repo.delete(id).await?;
        tracing::info!(article_id = command.id, "article deleted");
        Ok(())
    }
}
