pub mod cache;
pub mod config;
pub mod db;
pub mod errors;
pub mod models;
pub mod routes;
pub mod services;

use std::sync::Arc;

use sqlx::PgPool;

use crate::cache::ViewCache;
use crate::models::similarity::SimilarityRecord;

/// Shared application state passed to all Axum handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    pub db: PgPool,
    pub config: config::AppConfig,
    /// Parsed similarity CSV, loaded on first request and kept until restart.
    pub similarity: Arc<ViewCache<Vec<SimilarityRecord>>>,
}

impl AppState {
    pub fn new(db: PgPool, config: config::AppConfig) -> Self {
        Self {
            db,
            config,
            similarity: Arc::new(ViewCache::new()),
        }
    }
}
