//! # Seed Dataset
//!
//! Builds the starting collection from a JSON array of movies. Each entry
//! must carry its own string `id` and pass the full schema, so a bad
//! dataset is refused at start-up instead of surfacing as invalid records.

use std::collections::HashSet;
use std::path::Path;

use serde_json::Value;

use crate::error::SeedError;
use crate::identity::MovieId;
use crate::movie::MovieRecord;
use crate::schema::validate_full;
use crate::store::MovieStore;

/// Parse and validate a seed dataset, keeping entry order.
pub fn parse_seed(json: &str) -> Result<Vec<MovieRecord>, SeedError> {
    let value: Value = serde_json::from_str(json)?;
    let Value::Array(entries) = value else {
        return Err(SeedError::NotAnArray);
    };

    let mut seen = HashSet::with_capacity(entries.len());
    let mut records = Vec::with_capacity(entries.len());
    for (index, entry) in entries.iter().enumerate() {
        let id = entry
            .get("id")
            .and_then(Value::as_str)
            .filter(|s| !s.trim().is_empty())
            .map(MovieId::from)
            .ok_or(SeedError::MissingId { index })?;
        let movie = validate_full(entry).map_err(|errors| SeedError::Invalid { index, errors })?;
        if !seen.insert(id.clone()) {
            return Err(SeedError::DuplicateId { index, id });
        }
        records.push(MovieRecord::new(id, movie));
    }
    Ok(records)
}

/// Read and parse a seed dataset from disk.
pub fn load_seed_file(path: &Path) -> Result<Vec<MovieRecord>, SeedError> {
    let json = std::fs::read_to_string(path).map_err(|source| SeedError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_seed(&json)
}

impl MovieStore {
    /// A store pre-populated from a seed dataset.
    pub fn from_seed(json: &str) -> Result<Self, SeedError> {
        parse_seed(json).map(Self::with_records)
    }
}
