//! # movies-api — Axum HTTP Service for the Movie Collection
//!
//! Thin transport shell over `movies-core`: handlers parse the request,
//! hand the body to the schema validator, call the store, and serialize
//! the outcome. No business rules live here.
//!
//! ## API Surface
//!
//! | Route                 | Handler                               |
//! |-----------------------|---------------------------------------|
//! | `GET /`               | [`routes::index`]                     |
//! | `GET /movies`         | [`routes::movies::list_movies`]       |
//! | `POST /movies`        | [`routes::movies::create_movie`]      |
//! | `GET /movies/{id}`    | [`routes::movies::get_movie`]         |
//! | `PATCH /movies/{id}`  | [`routes::movies::update_movie`]      |
//! | `DELETE /movies/{id}` | [`routes::movies::delete_movie`]      |
//! | `GET /openapi.json`   | [`openapi`]                           |
//!
//! ## Middleware Stack (execution order)
//!
//! ```text
//! TraceLayer → CorsLayer → origin guard → body limit → Handler
//! ```

pub mod bootstrap;
pub mod config;
pub mod error;
pub mod extractors;
pub mod middleware;
pub mod openapi;
pub mod routes;
pub mod state;

use axum::extract::DefaultBodyLimit;
use axum::middleware::from_fn;
use axum::{Extension, Router};
use tower_http::trace::TraceLayer;

pub use error::AppError;
pub use state::AppState;

use crate::error::BodyKey;
use crate::middleware::origin::{cors_layer, origin_guard};

/// Request bodies above this size are refused before parsing.
pub const MAX_BODY_BYTES: usize = 1024 * 1024;

/// Assemble the application router with all routes and middleware.
pub fn app(state: AppState) -> Router {
    let origins = state.allowed_origins.clone();

    Router::new()
        .merge(routes::router())
        .merge(openapi::router())
        .fallback(fallback)
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(from_fn(origin_guard))
        .layer(Extension(origins.clone()))
        .layer(cors_layer(&origins))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Unknown route.
async fn fallback() -> AppError {
    AppError::not_found(BodyKey::Error, "Not found")
}
