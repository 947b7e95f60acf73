//! Article CRUD HTTP API: Axum controllers over a PostgreSQL-backed
//! article repository.

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
