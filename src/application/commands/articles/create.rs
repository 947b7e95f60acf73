// src/application/commands/articles/create.rs
use super::ArticleCommandService;
use crate::{
    application::{dto::ArticleDto, error::ApplicationResult},
    domain::article::{ArticleContent, ArticleDraft, ArticleTitle, NewArticle},
};

pub struct CreateArticleCommand {
    pub title: String,
    pub content: String,
}

impl ArticleCommandService {
    /// Persists a new article; storage assigns the id. Repeated calls with
    /// the same payload create distinct articles.
    pub async fn create_article(
        &self,
        command: CreateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let draft = ArticleDraft {
            title: command.title,
            content: command.content,
        };
        Self::validate_draft(&draft)?;

        let new_article = NewArticle {
            title: ArticleTitle::new(draft.title)?,
            content: ArticleContent::new(draft.content)?,
        };

        let created = self.write_repo.insert(new_article).await?;
        tracing::info!(article_id = i64::from(created.id), "article created");
        Ok(created.into())
    }
}
