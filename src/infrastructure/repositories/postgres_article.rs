// src/infrastructure/repositories/postgres_article.rs
use super::error::map_sqlx;
use crate::domain::article::{
    Article, ArticleContent, ArticleId, ArticlePage, ArticleReadRepository, ArticleTitle,
    ArticleUpdate, ArticleWriteRepository, NewArticle, SortOrder,
};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

#[derive(Clone)]
pub struct PostgresArticleWriteRepository {
    pool: PgPool,
}

impl PostgresArticleWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresArticleReadRepository {
    pool: PgPool,
}

impl PostgresArticleReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    id: i64,
    title: String,
    content: String,
}

impl TryFrom<ArticleRow> for Article {
    type Error = DomainError;

    fn try_from(row: ArticleRow) -> Result<Self, Self::Error> {
        Ok(Article {
            id: ArticleId::new(row.id)?,
            title: ArticleTitle::new(row.title)?,
            content: ArticleContent::new(row.content)?,
        })
    }
}

#[async_trait]
impl ArticleWriteRepository for PostgresArticleWriteRepository {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let NewArticle { title, content } = article;

        let row = sqlx::query_as::<_, ArticleRow>(
            "INSERT INTO articles (title, content)
             VALUES ($1, $2)
             RETURNING id, title, content",
        )
        .bind(title.as_str())
        .bind(content.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Article::try_from(row)
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article> {
        let ArticleUpdate { id, title, content } = update;

        let maybe_row = sqlx::query_as::<_, ArticleRow>(
            "UPDATE articles SET title = $1, content = $2
             WHERE id = $3
             RETURNING id, title, content",
        )
        .bind(title.as_str())
        .bind(content.as_str())
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        let row = maybe_row.ok_or_else(|| DomainError::NotFound("article not found".into()))?;
        Article::try_from(row)
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM articles WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("article not found".into()));
        }
        Ok(())
    }
}

impl PostgresArticleReadRepository {
    fn apply_keyword_filter<'a>(
        builder: &mut QueryBuilder<'a, Postgres>,
        pattern: Option<&'a str>,
    ) {
        if let Some(pattern) = pattern {
            builder.push(" WHERE (title ILIKE ");
            builder.push_bind(pattern);
            builder.push(" OR content ILIKE ");
            builder.push_bind(pattern);
            builder.push(")");
        }
    }

    async fn count_matching(&self, pattern: Option<&str>) -> DomainResult<u64> {
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new("SELECT COUNT(*) FROM articles");
        Self::apply_keyword_filter(&mut builder, pattern);

        let total: i64 = builder
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Ok(total.max(0) as u64)
    }
}

#[async_trait]
impl ArticleReadRepository for PostgresArticleReadRepository {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        let row = sqlx::query_as::<_, ArticleRow>(
            "SELECT id, title, content FROM articles WHERE id = $1",
        )
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Article::try_from).transpose()
    }

    async fn search(
        &self,
        keyword: Option<&str>,
        order: SortOrder,
        limit: u32,
        offset: u32,
    ) -> DomainResult<ArticlePage> {
        let pattern = keyword.map(|keyword| format!("%{keyword}%"));

        let total = self.count_matching(pattern.as_deref()).await?;

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("SELECT id, title, content FROM articles");
        Self::apply_keyword_filter(&mut builder, pattern.as_deref());
        builder.push(match order {
            SortOrder::Asc => " ORDER BY id ASC",
            SortOrder::Desc => " ORDER BY id DESC",
        });
        builder.push(" LIMIT ");
        builder.push_bind(i64::from(limit));
        builder.push(" OFFSET ");
        builder.push_bind(i64::from(offset));

        let rows = builder
            .build_query_as::<ArticleRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let articles = rows
            .into_iter()
            .map(Article::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ArticlePage {
            articles,
            total,
            limit,
            offset,
        })
    }
}
