//! # Movies API
//!
//! CRUD over the movie collection. Handlers validate bodies with
//! `movies_core::schema` and delegate everything else to the store.
//!
//! Not-found bodies differ by route: reads answer `{"error": ...}`,
//! writes answer `{"message": ...}`.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::Value;
use utoipa::{IntoParams, ToSchema};

use movies_core::{validate_full, validate_partial, Genre, MovieId, MovieRecord};

use crate::error::{
    AppError, BodyKey, ErrorBody, MessageBody, ValidationErrorBody, MOVIE_NOT_FOUND,
};
use crate::extractors::{JsonBody, QueryParams};
use crate::state::AppState;

/// Query string accepted by `GET /movies`.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListMoviesQuery {
    /// Only return movies tagged with this genre (case-insensitive).
    pub genre: Option<String>,
}

/// Body accepted by `POST /movies`. Documentation only: handlers validate
/// the raw JSON so that every field error can be reported.
#[derive(Debug, ToSchema)]
pub struct CreateMovieRequest {
    pub title: String,
    pub year: u16,
    pub director: String,
    pub duration: u64,
    pub poster: String,
    /// Defaults to 5.2.
    pub rate: Option<f64>,
    pub genre: Vec<Genre>,
}

/// Body accepted by `PATCH /movies/{id}`; every field is optional.
#[derive(Debug, ToSchema)]
pub struct UpdateMovieRequest {
    pub title: Option<String>,
    pub year: Option<u16>,
    pub director: Option<String>,
    pub duration: Option<u64>,
    pub poster: Option<String>,
    pub rate: Option<f64>,
    pub genre: Option<Vec<Genre>>,
}

/// Build the movies router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/movies", get(list_movies).post(create_movie))
        .route(
            "/movies/{id}",
            get(get_movie).patch(update_movie).delete(delete_movie),
        )
}

/// GET /movies — List movies, optionally filtered by genre.
#[utoipa::path(
    get,
    path = "/movies",
    params(ListMoviesQuery),
    responses(
        (status = 200, description = "Movies in collection order", body = Vec<MovieRecord>),
        (status = 400, description = "Malformed query string", body = ErrorBody),
    ),
    tag = "movies"
)]
pub async fn list_movies(
    State(state): State<AppState>,
    QueryParams(query): QueryParams<ListMoviesQuery>,
) -> Json<Vec<MovieRecord>> {
    let movies = match query.genre.as_deref().filter(|g| !g.is_empty()) {
        Some(genre) => state.movies.filter_by_genre(genre),
        None => state.movies.list_all(),
    };
    tracing::debug!(genre = ?query.genre, count = movies.len(), "listed movies");
    Json(movies)
}

/// GET /movies/{id} — Get one movie.
#[utoipa::path(
    get,
    path = "/movies/{id}",
    params(("id" = String, Path, description = "Movie id")),
    responses(
        (status = 200, description = "Movie found", body = MovieRecord),
        (status = 404, description = "Not found", body = ErrorBody),
    ),
    tag = "movies"
)]
pub async fn get_movie(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MovieRecord>, AppError> {
    let id = MovieId::from(id);
    state
        .movies
        .find_by_id(&id)
        .map(Json)
        .ok_or_else(|| AppError::not_found(BodyKey::Error, MOVIE_NOT_FOUND))
}

/// POST /movies — Create a movie.
#[utoipa::path(
    post,
    path = "/movies",
    request_body = CreateMovieRequest,
    responses(
        (status = 201, description = "Movie created", body = MovieRecord),
        (status = 400, description = "Validation failed", body = ValidationErrorBody),
    ),
    tag = "movies"
)]
pub async fn create_movie(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<Value>,
) -> Result<(StatusCode, Json<MovieRecord>), AppError> {
    let movie = validate_full(&payload)?;
    let record = state.movies.insert(movie);
    tracing::info!(movie_id = %record.id, title = %record.title, "movie created");
    Ok((StatusCode::CREATED, Json(record)))
}

/// PATCH /movies/{id} — Update some fields of a movie.
///
/// The body is validated before the id is looked up, so an invalid body
/// is a 400 even for an unknown id.
#[utoipa::path(
    patch,
    path = "/movies/{id}",
    params(("id" = String, Path, description = "Movie id")),
    request_body = UpdateMovieRequest,
    responses(
        (status = 200, description = "Movie updated", body = MovieRecord),
        (status = 400, description = "Validation failed", body = ValidationErrorBody),
        (status = 404, description = "Not found", body = MessageBody),
    ),
    tag = "movies"
)]
pub async fn update_movie(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(payload): JsonBody<Value>,
) -> Result<Json<MovieRecord>, AppError> {
    let patch = validate_partial(&payload)?;
    let id = MovieId::from(id);
    let record = state
        .movies
        .update_partial(&id, patch)
        .map_err(|_| AppError::not_found(BodyKey::Message, MOVIE_NOT_FOUND))?;
    tracing::info!(movie_id = %record.id, "movie updated");
    Ok(Json(record))
}

/// DELETE /movies/{id} — Delete a movie.
#[utoipa::path(
    delete,
    path = "/movies/{id}",
    params(("id" = String, Path, description = "Movie id")),
    responses(
        (status = 200, description = "Movie deleted", body = MessageBody),
        (status = 404, description = "Not found", body = MessageBody),
    ),
    tag = "movies"
)]
pub async fn delete_movie(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageBody>, AppError> {
    let id = MovieId::from(id);
    let removed = state
        .movies
        .delete_by_id(&id)
        .map_err(|_| AppError::not_found(BodyKey::Message, MOVIE_NOT_FOUND))?;
    tracing::info!(movie_id = %removed.id, title = %removed.title, "movie deleted");
    Ok(Json(MessageBody::new("Movie deleted")))
}
