// src/infrastructure/repositories/mod.rs
mod error;
mod postgres_article;

pub use postgres_article::{PostgresArticleReadRepository, PostgresArticleWriteRepository};
