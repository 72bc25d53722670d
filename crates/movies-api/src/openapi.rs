//! # OpenAPI Specification Assembly
//!
//! Assembles the utoipa-documented routes into a single OpenAPI document,
//! served at `/openapi.json`.

use axum::routing::get;
use axum::{Json, Router};
use utoipa::OpenApi;

use crate::state::AppState;

/// Assembled OpenAPI document for the movies API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Movies API",
        description = "In-memory movie collection: list, filter by genre, create, update, and delete.\n\nBodies are validated field by field; a rejected payload answers 400 with every field error.",
    ),
    servers(
        (url = "http://localhost:8000", description = "Local development server"),
    ),
    paths(
        crate::routes::index,
        crate::routes::movies::list_movies,
        crate::routes::movies::get_movie,
        crate::routes::movies::create_movie,
        crate::routes::movies::update_movie,
        crate::routes::movies::delete_movie,
    ),
    components(
        schemas(
            movies_core::MovieRecord,
            movies_core::MovieId,
            movies_core::Genre,
            movies_core::FieldError,
            movies_core::FieldErrorCode,
            crate::routes::movies::CreateMovieRequest,
            crate::routes::movies::UpdateMovieRequest,
            crate::error::ErrorBody,
            crate::error::ValidationErrorBody,
            crate::error::MessageBody,
        ),
    ),
    tags(
        (name = "meta", description = "Service greeting"),
        (name = "movies", description = "Movie collection CRUD"),
    )
)]
pub struct ApiDoc;

/// Build the OpenAPI router.
pub fn router() -> Router<AppState> {
    Router::new().route("/openapi.json", get(openapi_json))
}

/// GET /openapi.json — Return the generated OpenAPI document.
async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spec_generates() {
        let spec = ApiDoc::openapi();
        assert_eq!(spec.info.title, "Movies API");
    }

    #[test]
    fn spec_has_movie_paths() {
        let spec = ApiDoc::openapi();
        assert!(spec.paths.paths.contains_key("/"));
        assert!(spec.paths.paths.contains_key("/movies"));
        assert!(spec.paths.paths.contains_key("/movies/{id}"));
    }

    #[test]
    fn spec_registers_schemas() {
        let spec = ApiDoc::openapi();
        let components = spec.components.expect("components");
        for name in ["MovieRecord", "Genre", "FieldError", "ValidationErrorBody"] {
            assert!(
                components.schemas.contains_key(name),
                "missing schema {name}"
            );
        }
    }

    #[test]
    fn spec_serializes_to_json() {
        let json = ApiDoc::openapi().to_json().unwrap();
        assert!(json.contains("\"/movies/{id}\""));
    }
}
