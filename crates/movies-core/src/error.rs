//! # Error Types
//!
//! All errors use `thiserror`. Validation failures are data, not panics:
//! the validator returns a [`ValidationErrors`] list that the caller maps
//! to a response.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

use crate::identity::MovieId;

/// Which kind of constraint a field violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum FieldErrorCode {
    /// A required field is absent.
    Required,
    /// The value has the wrong JSON type.
    InvalidType,
    /// A number that must be integral has a fractional part.
    NotInteger,
    /// Below the lower bound (or an empty string where text is required).
    TooSmall,
    /// Above the upper bound.
    TooBig,
    /// Text is not an absolute URL.
    InvalidUrl,
    /// An array element is not one of the allowed tags.
    InvalidEnumValue,
}

/// A single validation failure tied to one input field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FieldError {
    /// Field name; empty when the payload itself has the wrong shape.
    pub path: String,
    /// Human-readable reason.
    pub message: String,
    /// Constraint kind.
    pub code: FieldErrorCode,
    /// Element position for failures inside an array field.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<usize>,
}

impl FieldError {
    pub fn new(path: &str, code: FieldErrorCode, message: impl Into<String>) -> Self {
        Self {
            path: path.to_string(),
            message: message.into(),
            code,
            index: None,
        }
    }

    /// Attach an array element position.
    pub fn at(mut self, index: usize) -> Self {
        self.index = Some(index);
        self
    }
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.index {
            Some(i) => write!(f, "{}[{}]: {}", self.path, i, self.message),
            None => write!(f, "{}: {}", self.path, self.message),
        }
    }
}

/// Ordered list of field failures from one validation pass.
///
/// Never empty when returned as an `Err`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema, Error)]
#[serde(transparent)]
#[error("{}", render(.0))]
pub struct ValidationErrors(pub Vec<FieldError>);

fn render(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl ValidationErrors {
    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns `true` when some failure references `path`.
    pub fn has_path(&self, path: &str) -> bool {
        self.0.iter().any(|e| e.path == path)
    }

    pub fn into_inner(self) -> Vec<FieldError> {
        self.0
    }
}

/// Error from a store operation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// No record carries the requested id.
    #[error("movie {0} not found")]
    NotFound(MovieId),
}

/// Error while loading the seed dataset.
#[derive(Error, Debug)]
pub enum SeedError {
    /// The dataset is not valid JSON.
    #[error("seed dataset is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The dataset's top level is not an array.
    #[error("seed dataset must be a JSON array of movies")]
    NotAnArray,

    /// An entry lacks a usable `id`.
    #[error("seed entry {index} has no string id")]
    MissingId { index: usize },

    /// Two entries share an id.
    #[error("seed entry {index} reuses id {id}")]
    DuplicateId { index: usize, id: MovieId },

    /// An entry fails the movie schema.
    #[error("seed entry {index} is invalid: {errors}")]
    Invalid {
        index: usize,
        #[source]
        errors: ValidationErrors,
    },

    /// The dataset file could not be read.
    #[error("failed to read seed file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
