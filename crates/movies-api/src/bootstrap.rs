//! # Start-up Wiring
//!
//! Turns an [`AppConfig`] into [`AppState`]: loads the seed dataset and
//! parses the origin allow-list. Kept out of `main.rs` so it can be tested.

use thiserror::Error;

use movies_core::seed::load_seed_file;
use movies_core::{MovieStore, SeedError};

use crate::config::AppConfig;
use crate::middleware::origin::{AllowedOrigins, InvalidOrigin};
use crate::state::AppState;

/// Dataset compiled into the binary, used when no seed path is configured.
pub const EMBEDDED_SEED: &str = include_str!("../data/movies.json");

/// Error raised while preparing application state.
#[derive(Error, Debug)]
pub enum BootstrapError {
    #[error("failed to load seed dataset: {0}")]
    Seed(#[from] SeedError),

    #[error("invalid allowed origin: {0}")]
    Origin(#[from] InvalidOrigin),
}

/// Build the store from the configured seed source.
pub fn load_store(config: &AppConfig) -> Result<MovieStore, BootstrapError> {
    let store = match &config.seed_path {
        Some(path) => {
            tracing::info!(path = %path.display(), "loading seed dataset from file");
            MovieStore::with_records(load_seed_file(path)?)
        }
        None => MovieStore::from_seed(EMBEDDED_SEED)?,
    };
    Ok(store)
}

/// Build the full application state.
pub fn build_state(config: &AppConfig) -> Result<AppState, BootstrapError> {
    let origins = AllowedOrigins::parse(&config.allowed_origins)?;
    let store = load_store(config)?;
    tracing::info!(
        movies = store.len(),
        origins = origins.iter().count(),
        "application state ready"
    );
    Ok(AppState::with_origins(store, origins))
}
