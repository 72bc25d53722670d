//! # API Route Modules
//!
//! - `/` — greeting, doubles as a liveness check.
//! - [`movies`] — the movie collection CRUD surface.

pub mod movies;

use axum::routing::get;
use axum::{Json, Router};

use crate::error::MessageBody;
use crate::state::AppState;

/// Build the router for every application route.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .merge(movies::router())
}

/// GET / — Greeting.
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service is up", body = MessageBody),
    ),
    tag = "meta"
)]
pub async fn index() -> Json<MessageBody> {
    Json(MessageBody::new("hello there"))
}
