//! # Movie Store
//!
//! The in-memory collection of movies. Insertion order is the only order.
//!
//! Every mutation takes the write lock once and finishes before releasing
//! it, so no reader ever sees a half-applied insert, update or delete.
//! Reads share the lock and return owned snapshots.

use parking_lot::RwLock;

use crate::error::StoreError;
use crate::identity::MovieId;
use crate::movie::{MoviePatch, MovieRecord, NewMovie};

/// Ordered, lock-guarded collection of [`MovieRecord`]s.
#[derive(Debug, Default)]
pub struct MovieStore {
    movies: RwLock<Vec<MovieRecord>>,
}

impl MovieStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// A store holding `movies` in the given order.
    ///
    /// Callers are responsible for id uniqueness; [`crate::seed`] checks it
    /// for datasets.
    pub fn with_records(movies: Vec<MovieRecord>) -> Self {
        Self {
            movies: RwLock::new(movies),
        }
    }

    pub fn len(&self) -> usize {
        self.movies.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.read().is_empty()
    }

    /// Snapshot of the whole collection.
    pub fn list_all(&self) -> Vec<MovieRecord> {
        self.movies.read().clone()
    }

    /// Movies tagged with `genre`, compared case-insensitively.
    pub fn filter_by_genre(&self, genre: &str) -> Vec<MovieRecord> {
        self.movies
            .read()
            .iter()
            .filter(|m| m.has_genre(genre))
            .cloned()
            .collect()
    }

    pub fn find_by_id(&self, id: &MovieId) -> Option<MovieRecord> {
        self.movies.read().iter().find(|m| &m.id == id).cloned()
    }

    /// Append a new movie under a freshly generated id.
    pub fn insert(&self, movie: NewMovie) -> MovieRecord {
        let record = MovieRecord::new(MovieId::generate(), movie);
        self.movies.write().push(record.clone());
        record
    }

    /// Merge `patch` into the movie with `id`, keeping its position.
    pub fn update_partial(&self, id: &MovieId, patch: MoviePatch) -> Result<MovieRecord, StoreError> {
        let mut movies = self.movies.write();
        let movie = movies
            .iter_mut()
            .find(|m| &m.id == id)
            .ok_or_else(|| StoreError::NotFound(id.clone()))?;
        movie.apply(patch);
        Ok(movie.clone())
    }

    /// Remove the movie with `id` and hand it back.
    pub fn delete_by_id(&self, id: &MovieId) -> Result<MovieRecord, StoreError> {
        let mut movies = self.movies.write();
        let index = movies
            .iter()
            .position(|m| &m.id == id)
            .ok_or_else(|| StoreError::NotFound(id.clone()))?;
        Ok(movies.remove(index))
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::genre::Genre;
    use proptest::prelude::*;

    proptest! {
        /// Deleting any one record leaves the others in their original order.
        #[test]
        fn delete_preserves_relative_order(count in 1usize..20, pick in any::<prop::sample::Index>()) {
            let store = MovieStore::new();
            for i in 0..count {
                store.insert(NewMovie {
                    title: format!("movie {i}"),
                    year: 2000,
                    director: "D".to_string(),
                    duration: 90,
                    poster: "https://x.com/p.jpg".to_string(),
                    rate: 5.0,
                    genre: vec![Genre::Drama],
                });
            }
            let before = store.list_all();
            let victim = pick.index(count);
            store.delete_by_id(&before[victim].id).unwrap();

            let mut expected = before.clone();
            expected.remove(victim);
            prop_assert_eq!(store.list_all(), expected);
        }
    }
}
