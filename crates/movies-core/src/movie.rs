//! # Movie Records
//!
//! [`MovieRecord`] is the stored entity. [`NewMovie`] and [`MoviePatch`] are
//! the validated inputs for create and partial update; both are only
//! produced by the [`crate::schema`] validator.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::genre::Genre;
use crate::identity::MovieId;

/// Rate assigned on create when the payload omits one.
pub const DEFAULT_RATE: f64 = 5.2;

/// A validated, stored movie.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MovieRecord {
    pub id: MovieId,
    pub title: String,
    pub year: u16,
    pub director: String,
    /// Running time in minutes.
    pub duration: u64,
    pub poster: String,
    pub rate: f64,
    pub genre: Vec<Genre>,
}

/// Fully validated create payload; everything but the id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewMovie {
    pub title: String,
    pub year: u16,
    pub director: String,
    pub duration: u64,
    pub poster: String,
    pub rate: f64,
    pub genre: Vec<Genre>,
}

/// Validated partial update. `None` leaves the stored value alone.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MoviePatch {
    pub title: Option<String>,
    pub year: Option<u16>,
    pub director: Option<String>,
    pub duration: Option<u64>,
    pub poster: Option<String>,
    pub rate: Option<f64>,
    pub genre: Option<Vec<Genre>>,
}

impl MovieRecord {
    /// Attach an id to a validated payload.
    pub fn new(id: MovieId, movie: NewMovie) -> Self {
        Self {
            id,
            title: movie.title,
            year: movie.year,
            director: movie.director,
            duration: movie.duration,
            poster: movie.poster,
            rate: movie.rate,
            genre: movie.genre,
        }
    }

    /// Returns `true` when any genre tag matches `genre`, ignoring case.
    pub fn has_genre(&self, genre: &str) -> bool {
        self.genre.iter().any(|g| g.matches(genre))
    }

    /// Overwrite the fields present in `patch`. The id is never touched.
    pub fn apply(&mut self, patch: MoviePatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(year) = patch.year {
            self.year = year;
        }
        if let Some(director) = patch.director {
            self.director = director;
        }
        if let Some(duration) = patch.duration {
            self.duration = duration;
        }
        if let Some(poster) = patch.poster {
            self.poster = poster;
        }
        if let Some(rate) = patch.rate {
            self.rate = rate;
        }
        if let Some(genre) = patch.genre {
            self.genre = genre;
        }
    }
}

impl MoviePatch {
    /// Returns `true` when the patch changes nothing.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
