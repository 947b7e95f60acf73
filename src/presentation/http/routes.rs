// src/presentation/http/routes.rs
use crate::presentation::http::controllers::articles;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json, Router,
    routing::get,
};
use serde::Serialize;
use tower_http::trace::TraceLayer;

pub fn build_router(state: HttpState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route(
            "/articles",
            get(articles::list_articles).post(articles::create_article),
        )
        .route(
            "/articles/{id}",
            get(articles::get_article)
                .put(articles::update_article)
                .delete(articles::delete_article),
        )
        .layer(TraceLayer::new_for_http())
        .layer(Extension(state))
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: String,
}

pub async fn health() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "ok".into(),
    })
}
