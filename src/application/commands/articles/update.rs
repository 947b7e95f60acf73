use super::ArticleCommandService;
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::{ArticleContent, ArticleDraft, ArticleId, ArticleTitle, ArticleUpdate},
};

pub struct UpdateArticleCommand {
    pub id: i64,
    pub title: String,
    pub content: String,
}

impl ArticleCommandService {
    /// Overwrites an existing article's title and content in place; the id
    /// never changes. Resolving the article precedes payload validation, so
    /// an unknown id reports not-found even when the payload is also bad.
    pub async fn update_article(
        &self,
        command: UpdateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let id = ArticleId::new(command.id)?;
        let mut article = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        let draft = ArticleDraft {
            title: command.title,
            content: command.content,
        };
        Self::validate_draft(&draft)?;

        article.set_content(
            ArticleTitle::new(draft.title)?,
            ArticleContent::new(draft.content)?,
        );

        let updated = self
            .write_repo
            .update(ArticleUpdate {
                id,
                title: article.title,
                content: article.content,
            })
            .await?;
        Ok(updated.into())
    }
}
