use crate::domain::article::entity::{Article, ArticleUpdate, NewArticle};
use crate::domain::article::page::ArticlePage;
use crate::domain::article::value_objects::ArticleId;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

/// Sort direction over the stable sort key `id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

#[async_trait]
pub trait ArticleReadRepository: Send + Sync {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>>;

    /// Filtered, sorted, paginated read. `keyword`, when present, matches
    /// articles whose title or content contains it case-insensitively.
    /// An offset past the end of the result set yields an empty page, not
    /// an error.
    async fn search(
        &self,
        keyword: Option<&str>,
        order: SortOrder,
        limit: u32,
        offset: u32,
    ) -> DomainResult<ArticlePage>;
}

#[async_trait]
pub trait ArticleWriteRepository: Send + Sync {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article>;
    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article>;
    /// Removes the article. Deleting an id that is already gone reports
    /// `DomainError::NotFound` rather than succeeding silently.
    async fn delete(&self, id: ArticleId) -> DomainResult<()>;
}
