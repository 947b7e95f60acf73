// src/domain/article/entity.rs
use crate::domain::article::value_objects::{ArticleContent, ArticleId, ArticleTitle};

#[derive(Debug, Clone)]
pub struct Article {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub content: ArticleContent,
}

impl Article {
    /// Overwrites title and content in place. The id is assigned once at
    /// creation and never changes.
    pub fn set_content(&mut self, title: ArticleTitle, content: ArticleContent) {
        self.title = title;
        self.content = content;
    }
}

/// A validated article awaiting its storage-assigned id.
#[derive(Debug, Clone)]
pub struct NewArticle {
    pub title: ArticleTitle,
    pub content: ArticleContent,
}

/// Full overwrite of an existing article's title and content.
#[derive(Debug, Clone)]
pub struct ArticleUpdate {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub content: ArticleContent,
}
