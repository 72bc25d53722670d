//! # Application State
//!
//! Shared state handed to every handler through Axum's `State` extractor.
//! The store is built once at start-up and owned here; nothing reaches it
//! through globals.

use std::sync::Arc;

use movies_core::MovieStore;

use crate::middleware::origin::AllowedOrigins;

/// Shared application state passed to all route handlers.
///
/// Cheaply cloneable via `Arc`; all clones share one store.
#[derive(Debug, Clone)]
pub struct AppState {
    pub movies: Arc<MovieStore>,
    pub allowed_origins: AllowedOrigins,
}

impl AppState {
    /// State over `movies` with the default origin allow-list.
    pub fn new(movies: MovieStore) -> Self {
        Self::with_origins(movies, AllowedOrigins::default())
    }

    pub fn with_origins(movies: MovieStore, allowed_origins: AllowedOrigins) -> Self {
        Self {
            movies: Arc::new(movies),
            allowed_origins,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(MovieStore::new())
    }
}
