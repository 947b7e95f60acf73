// tests/support/mocks.rs
use async_trait::async_trait;
use std::sync::Mutex;

use kiji::domain::article::{
    Article, ArticleContent, ArticleId, ArticlePage, ArticleReadRepository, ArticleTitle,
    ArticleUpdate, ArticleWriteRepository, NewArticle, SortOrder,
};
use kiji::domain::errors::{DomainError, DomainResult};

/* ---------------------------- InMemoryArticleRepository ---------------------------- */

/// A functional in-memory stand-in for the Postgres repositories: ids are
/// assigned sequentially and search implements the same filter/sort/slice
/// semantics, so e2e tests can exercise full round trips.
pub struct InMemoryArticleRepository {
    state: Mutex<RepoState>,
}

struct RepoState {
    articles: Vec<Article>,
    next_id: i64,
}

impl InMemoryArticleRepository {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(RepoState {
                articles: Vec::new(),
                next_id: 1,
            }),
        }
    }

    pub fn seeded(entries: &[(&str, &str)]) -> Self {
        let repo = Self::new();
        {
            let mut state = repo.state.lock().unwrap();
            for (title, content) in entries {
                let id = state.next_id;
                state.next_id += 1;
                state.articles.push(Article {
                    id: ArticleId::new(id).unwrap(),
                    title: ArticleTitle::new(*title).unwrap(),
                    content: ArticleContent::new(*content).unwrap(),
                });
            }
        }
        repo
    }
}

#[async_trait]
impl ArticleReadRepository for InMemoryArticleRepository {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        let state = self.state.lock().unwrap();
        Ok(state.articles.iter().find(|a| a.id == id).cloned())
    }

    async fn search(
        &self,
        keyword: Option<&str>,
        order: SortOrder,
        limit: u32,
        offset: u32,
    ) -> DomainResult<ArticlePage> {
        let state = self.state.lock().unwrap();
        let needle = keyword.map(str::to_lowercase);

        let mut matching: Vec<Article> = state
            .articles
            .iter()
            .filter(|a| match &needle {
                Some(needle) => {
                    a.title.as_str().to_lowercase().contains(needle)
                        || a.content.as_str().to_lowercase().contains(needle)
                }
                None => true,
            })
            .cloned()
            .collect();

        matching.sort_by_key(|a| i64::from(a.id));
        if order == SortOrder::Desc {
            matching.reverse();
        }

        let total = matching.len() as u64;
        let articles = matching
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .collect();

        Ok(ArticlePage {
            articles,
            total,
            limit,
            offset,
        })
    }
}

#[async_trait]
impl ArticleWriteRepository for InMemoryArticleRepository {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let mut state = self.state.lock().unwrap();
        let id = state.next_id;
        state.next_id += 1;
        let article = Article {
            id: ArticleId::new(id)?,
            title: article.title,
            content: article.content,
        };
        state.articles.push(article.clone());
        Ok(article)
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article> {
        let mut state = self.state.lock().unwrap();
        let article = state
            .articles
            .iter_mut()
            .find(|a| a.id == update.id)
            .ok_or_else(|| DomainError::NotFound("article not found".into()))?;
        article.set_content(update.title, update.content);
        Ok(article.clone())
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        let mut state = self.state.lock().unwrap();
        let before = state.articles.len();
        state.articles.retain(|a| a.id != id);
        if state.articles.len() == before {
            return Err(DomainError::NotFound("article not found".into()));
        }
        Ok(())
    }
}

/* ---------------------------- FailingArticleRepository ---------------------------- */

/// Fails every call with a persistence error, for the storage-failure path.
pub struct FailingArticleRepository;

fn unreachable_storage() -> DomainError {
    DomainError::Persistence("database unreachable".into())
}

#[async_trait]
impl ArticleReadRepository for FailingArticleRepository {
    async fn find_by_id(&self, _id: ArticleId) -> DomainResult<Option<Article>> {
        Err(unreachable_storage())
    }

    async fn search(
        &self,
        _keyword: Option<&str>,
        _order: SortOrder,
        _limit: u32,
        _offset: u32,
    ) -> DomainResult<ArticlePage> {
        Err(unreachable_storage())
    }
}

#[async_trait]
impl ArticleWriteRepository for FailingArticleRepository {
    async fn insert(&self, _article: NewArticle) -> DomainResult<Article> {
        Err(unreachable_storage())
    }

    async fn update(&self, _update: ArticleUpdate) -> DomainResult<Article> {
        Err(unreachable_storage())
    }

    async fn delete(&self, _id: ArticleId) -> DomainResult<()> {
        Err(unreachable_storage())
    }
}
