//! courtlog - badminton match video catalogue and rally/shot tagging service
//!
//! A single-binary HTTP service: match CRUD over SQLite, rally/shot event
//! tagging with consistency bookkeeping, chart aggregation helpers, and
//! streamed video serving from a configured root directory.

use axum::Router;
use sqlx::SqlitePool;
use std::path::PathBuf;
use tower_http::trace::TraceLayer;

pub mod api;
pub mod config;
pub mod db;
pub mod duration;
pub mod error;
pub mod library;
pub mod stats;
pub mod video;

pub use error::{ApiError, ApiResult};

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: SqlitePool,
    /// Video root directory; None disables video serving
    pub video_root: Option<PathBuf>,
}

impl AppState {
    /// Create new application state
    pub fn new(db: SqlitePool, video_root: Option<PathBuf>) -> Self {
        Self { db, video_root }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(api::health::routes())
        .merge(api::matches::routes())
        .merge(api::rallies::routes())
        .merge(api::shots::routes())
        .merge(api::stats::routes())
        .merge(api::video::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
