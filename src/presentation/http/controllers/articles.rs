// src/presentation/http/controllers/articles.rs
use crate::application::{
    commands::articles::{CreateArticleCommand, DeleteArticleCommand, UpdateArticleCommand},
    dto::{ArticleDto, OffsetPage},
    queries::articles::{GetArticleByIdQuery, ListArticlesQuery},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::StatusCode,
};
use serde::Deserialize;

fn default_limit() -> u32 {
    15
}

fn default_order() -> String {
    "asc".into()
}

#[derive(Debug, Deserialize)]
pub struct ArticleListParams {
    #[serde(default)]
    pub keyword: Option<String>,
    #[serde(default = "default_order")]
    pub order: String,
    #[serde(default = "default_limit")]
    pub limit: u32,
    #[serde(default)]
    pub offset: u32,
}

/// Candidate article body. Missing fields default to empty strings so they
/// surface as blank-field violations instead of a deserialization reject.
#[derive(Debug, Deserialize)]
pub struct ArticlePayload {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
}

pub async fn list_articles(
    Extension(state): Extension<HttpState>,
    Query(params): Query<ArticleListParams>,
) -> HttpResult<Json<OffsetPage<ArticleDto>>> {
    state
        .services
        .article_queries
        .list_articles(ListArticlesQuery {
            keyword: params.keyword,
            order: params.order,
            limit: params.limit,
            offset: params.offset,
        })
        .await
        .into_http()
        .map(Json)
}

pub async fn get_article(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<ArticleDto>> {
    state
        .services
        .article_queries
        .get_article_by_id(GetArticleByIdQuery { id })
        .await
        .into_http()
        .map(Json)
}

pub async fn create_article(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<ArticlePayload>,
) -> HttpResult<(StatusCode, Json<ArticleDto>)> {
    state
        .services
        .article_commands
        .create_article(CreateArticleCommand {
            title: payload.title,
            content: payload.content,
        })
        .await
        .into_http()
        .map(|article| (StatusCode::CREATED, Json(article)))
}

pub async fn update_article(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
    Json(payload): Json<ArticlePayload>,
) -> HttpResult<Json<ArticleDto>> {
    state
        .services
        .article_commands
        .update_article(UpdateArticleCommand {
            id,
            title: payload.title,
            content: payload.content,
        })
        .await
        .into_http()
        .map(Json)
}

pub async fn delete_article(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<StatusCode> {
    state
        .services
        .article_commands
        .delete_article(DeleteArticleCommand { id })
        .await
        .into_http()?;

    Ok(StatusCode::NO_CONTENT)
}
