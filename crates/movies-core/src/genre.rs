//! # Genre — Closed Tag Set
//!
//! The ten genres a movie may carry. Parsing is exact (case-sensitive) so
//! that stored records always hold the canonical spelling; the store's
//! genre filter does its own case folding.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use utoipa::ToSchema;

/// Genre tag attached to a movie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum Genre {
    Adventure,
    Action,
    Comedy,
    Drama,
    Horror,
    Romance,
    Thriller,
    Fantasy,
    #[serde(rename = "Sci-Fi")]
    SciFi,
    Crime,
}

impl Genre {
    /// Returns all genres in declaration order.
    pub fn all() -> &'static [Genre] {
        &[
            Self::Adventure,
            Self::Action,
            Self::Comedy,
            Self::Drama,
            Self::Horror,
            Self::Romance,
            Self::Thriller,
            Self::Fantasy,
            Self::SciFi,
            Self::Crime,
        ]
    }

    /// Canonical display name, identical to the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Adventure => "Adventure",
            Self::Action => "Action",
            Self::Comedy => "Comedy",
            Self::Drama => "Drama",
            Self::Horror => "Horror",
            Self::Romance => "Romance",
            Self::Thriller => "Thriller",
            Self::Fantasy => "Fantasy",
            Self::SciFi => "Sci-Fi",
            Self::Crime => "Crime",
        }
    }

    /// Case-insensitive comparison against free text.
    pub fn matches(&self, text: &str) -> bool {
        self.as_str().to_lowercase() == text.to_lowercase()
    }
}

impl std::fmt::Display for Genre {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when text names no known genre.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown genre: {0:?}")]
pub struct UnknownGenre(pub String);

impl FromStr for Genre {
    type Err = UnknownGenre;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|g| g.as_str() == s)
            .ok_or_else(|| UnknownGenre(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_genres_unique() {
        let mut seen = std::collections::HashSet::new();
        for g in Genre::all() {
            assert!(seen.insert(g), "Duplicate genre: {g}");
        }
        assert_eq!(seen.len(), 10);
    }

    #[test]
    fn as_str_parses_back() {
        for g in Genre::all() {
            assert_eq!(g.as_str().parse::<Genre>().unwrap(), *g);
        }
    }

    #[test]
    fn parse_is_case_sensitive() {
        assert!("comedy".parse::<Genre>().is_err());
        assert!("Scifi".parse::<Genre>().is_err());
        assert!("".parse::<Genre>().is_err());
    }

    #[test]
    fn serde_format_matches_as_str() {
        for g in Genre::all() {
            let json = serde_json::to_string(g).unwrap();
            assert_eq!(json, format!("\"{}\"", g.as_str()));
        }
    }

    #[test]
    fn matches_ignores_case() {
        assert!(Genre::SciFi.matches("sci-fi"));
        assert!(Genre::SciFi.matches("SCI-FI"));
        assert!(!Genre::SciFi.matches("sci"));
        assert!(!Genre::Drama.matches("dramas"));
    }
}
