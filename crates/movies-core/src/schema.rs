//! # Movie Schema Validation
//!
//! Field-by-field validation of untyped JSON payloads into [`NewMovie`]
//! (create) or [`MoviePatch`] (partial update).
//!
//! ## Rules
//!
//! | field | rule |
//! |-------|------|
//! | `title` | non-empty string |
//! | `year` | integer in `1900..=2024` |
//! | `director` | non-empty string |
//! | `duration` | integer `> 0` |
//! | `poster` | absolute URL |
//! | `rate` | number in `0..=10`, optional, defaults to [`DEFAULT_RATE`] on create |
//! | `genre` | array of [`Genre`] names, may be empty |
//!
//! Fields are checked in the order above and every failure is collected, so
//! the error list is the same no matter which check trips first. Unknown
//! keys (including `id`) are ignored. Values are never coerced: `"2020"` is
//! not a year.

use serde_json::{Map, Number, Value};
use url::Url;

use crate::error::{FieldError, FieldErrorCode, ValidationErrors};
use crate::genre::Genre;
use crate::movie::{MoviePatch, NewMovie, DEFAULT_RATE};

/// Earliest accepted release year.
pub const YEAR_MIN: u16 = 1900;
/// Latest accepted release year.
pub const YEAR_MAX: u16 = 2024;
/// Lowest accepted rate.
pub const RATE_MIN: f64 = 0.0;
/// Highest accepted rate.
pub const RATE_MAX: f64 = 10.0;

/// Largest integer a JSON float can carry without losing precision.
const MAX_SAFE_INTEGER: i128 = 9_007_199_254_740_991;

const YEAR_RANGE: &str = "Year must be between 1900 and 2024";
const RATE_RANGE: &str = "Rate must be between 0 and 10";

/// Validate a create payload. Every field except `rate` must be present.
pub fn validate_full(input: &Value) -> Result<NewMovie, ValidationErrors> {
    let mut schema = Schema::new(input, Mode::Full)?;

    let title = schema.title();
    let year = schema.year();
    let director = schema.director();
    let duration = schema.duration();
    let poster = schema.poster();
    let rate = schema.rate();
    let genre = schema.genre();

    match (title, year, director, duration, poster, genre) {
        (Some(title), Some(year), Some(director), Some(duration), Some(poster), Some(genre))
            if schema.errors.is_empty() =>
        {
            Ok(NewMovie {
                title,
                year,
                director,
                duration,
                poster,
                rate: rate.unwrap_or(DEFAULT_RATE),
                genre,
            })
        }
        _ => Err(ValidationErrors(schema.errors)),
    }
}

/// Validate a partial-update payload. Any subset of fields, including none,
/// is accepted as long as each present field passes its rule.
pub fn validate_partial(input: &Value) -> Result<MoviePatch, ValidationErrors> {
    let mut schema = Schema::new(input, Mode::Partial)?;

    let patch = MoviePatch {
        title: schema.title(),
        year: schema.year(),
        director: schema.director(),
        duration: schema.duration(),
        poster: schema.poster(),
        rate: schema.rate(),
        genre: schema.genre(),
    };

    if schema.errors.is_empty() {
        Ok(patch)
    } else {
        Err(ValidationErrors(schema.errors))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Full,
    Partial,
}

/// One validation pass over a payload object.
struct Schema<'a> {
    fields: &'a Map<String, Value>,
    mode: Mode,
    errors: Vec<FieldError>,
}

impl<'a> Schema<'a> {
    fn new(input: &'a Value, mode: Mode) -> Result<Self, ValidationErrors> {
        match input.as_object() {
            Some(fields) => Ok(Self {
                fields,
                mode,
                errors: Vec::new(),
            }),
            None => Err(ValidationErrors(vec![FieldError::new(
                "",
                FieldErrorCode::InvalidType,
                format!("Expected an object, received {}", type_name(input)),
            )])),
        }
    }

    fn fail(&mut self, path: &str, code: FieldErrorCode, message: impl Into<String>) {
        self.errors.push(FieldError::new(path, code, message));
    }

    /// Fetch a field, recording `required` when it is absent in full mode.
    fn lookup(&mut self, name: &str, required: &str) -> Option<&'a Value> {
        let fields = self.fields;
        let value = fields.get(name);
        if value.is_none() && self.mode == Mode::Full {
            self.fail(name, FieldErrorCode::Required, required);
        }
        value
    }

    fn number(&mut self, name: &str, value: &'a Value, invalid_type: &str) -> Option<&'a Number> {
        match value {
            Value::Number(n) => Some(n),
            _ => {
                self.fail(name, FieldErrorCode::InvalidType, invalid_type);
                None
            }
        }
    }

    fn text(&mut self, name: &str, required: &str, invalid_type: &str, empty: &str) -> Option<String> {
        let value = self.lookup(name, required)?;
        let Some(text) = value.as_str() else {
            self.fail(name, FieldErrorCode::InvalidType, invalid_type);
            return None;
        };
        if text.is_empty() {
            self.fail(name, FieldErrorCode::TooSmall, empty);
            return None;
        }
        Some(text.to_string())
    }

    fn title(&mut self) -> Option<String> {
        self.text(
            "title",
            "Title is required",
            "Title must be a string",
            "Title must not be empty",
        )
    }

    fn director(&mut self) -> Option<String> {
        self.text(
            "director",
            "Director is required",
            "Director must be a string",
            "Director must not be empty",
        )
    }

    fn year(&mut self) -> Option<u16> {
        let value = self.lookup("year", "Year is required")?;
        let n = self.number("year", value, "Year must be a number")?;
        let before = self.errors.len();

        let whole = integral(n);
        if whole.is_none() {
            self.fail("year", FieldErrorCode::NotInteger, "Year must be an integer");
        }
        let approx = n.as_f64().unwrap_or(f64::NAN);
        if approx < f64::from(YEAR_MIN) {
            self.fail("year", FieldErrorCode::TooSmall, YEAR_RANGE);
        }
        if approx > f64::from(YEAR_MAX) {
            self.fail("year", FieldErrorCode::TooBig, YEAR_RANGE);
        }

        if self.errors.len() != before {
            return None;
        }
        whole.and_then(|y| u16::try_from(y).ok())
    }

    fn duration(&mut self) -> Option<u64> {
        let value = self.lookup("duration", "Duration is required")?;
        let n = self.number("duration", value, "Duration must be a number")?;
        let before = self.errors.len();

        let whole = integral(n);
        if whole.is_none() {
            self.fail(
                "duration",
                FieldErrorCode::NotInteger,
                "Duration must be an integer",
            );
        }
        if n.as_f64().map_or(true, |d| d <= 0.0) {
            self.fail(
                "duration",
                FieldErrorCode::TooSmall,
                "Duration must be a positive number",
            );
        }

        if self.errors.len() != before {
            return None;
        }
        whole.and_then(|d| u64::try_from(d).ok())
    }

    fn poster(&mut self) -> Option<String> {
        let value = self.lookup("poster", "Poster is required")?;
        let Some(text) = value.as_str() else {
            self.fail("poster", FieldErrorCode::InvalidType, "Poster must be a string");
            return None;
        };
        if Url::parse(text).is_err() {
            self.fail(
                "poster",
                FieldErrorCode::InvalidUrl,
                "Poster must be a valid URL",
            );
            return None;
        }
        Some(text.to_string())
    }

    /// Never required; the create path supplies the default.
    fn rate(&mut self) -> Option<f64> {
        let fields = self.fields;
        let value = fields.get("rate")?;
        let n = self.number("rate", value, "Rate must be a number")?;
        let rate = n.as_f64()?;
        if rate < RATE_MIN {
            self.fail("rate", FieldErrorCode::TooSmall, RATE_RANGE);
            return None;
        }
        if rate > RATE_MAX {
            self.fail("rate", FieldErrorCode::TooBig, RATE_RANGE);
            return None;
        }
        Some(rate)
    }

    fn genre(&mut self) -> Option<Vec<Genre>> {
        let value = self.lookup("genre", "Genre is required")?;
        let Some(items) = value.as_array() else {
            self.fail(
                "genre",
                FieldErrorCode::InvalidType,
                "Genre must be an array of enum Genre",
            );
            return None;
        };

        let mut genres = Vec::with_capacity(items.len());
        let mut valid = true;
        for (index, item) in items.iter().enumerate() {
            match item.as_str().and_then(|s| s.parse::<Genre>().ok()) {
                Some(genre) => genres.push(genre),
                None => {
                    valid = false;
                    self.errors.push(
                        FieldError::new(
                            "genre",
                            FieldErrorCode::InvalidEnumValue,
                            format!("Invalid genre {item}, expected one of {}", genre_list()),
                        )
                        .at(index),
                    );
                }
            }
        }
        valid.then_some(genres)
    }
}

/// Integer value of `n`, if it has no fractional part and fits the safe range.
///
/// The bound applies whether the payload spelled the number as an integer
/// or as a float.
fn integral(n: &Number) -> Option<i128> {
    let whole = if let Some(i) = n.as_i64() {
        i128::from(i)
    } else if let Some(u) = n.as_u64() {
        i128::from(u)
    } else {
        let f = n.as_f64()?;
        if !f.is_finite() || f.fract() != 0.0 || f.abs() > MAX_SAFE_INTEGER as f64 {
            return None;
        }
        // Exact: |f| is at most 2^53 - 1.
        f as i128
    };
    (whole.abs() <= MAX_SAFE_INTEGER).then_some(whole)
}

fn genre_list() -> String {
    Genre::all()
        .iter()
        .map(Genre::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    fn genre_strategy() -> impl Strategy<Value = Vec<Genre>> {
        prop::collection::vec(prop::sample::select(Genre::all().to_vec()), 0..5)
    }

    fn payload(
        title: &str,
        year: i64,
        director: &str,
        duration: u64,
        genre: &[Genre],
    ) -> Value {
        json!({
            "title": title,
            "year": year,
            "director": director,
            "duration": duration,
            "poster": "https://img.example.com/poster.jpg",
            "genre": genre,
        })
    }

    proptest! {
        /// Every well-formed payload validates to the same field values.
        #[test]
        fn valid_payload_round_trips(
            title in "[A-Za-z][A-Za-z0-9 ]{0,30}",
            year in 1900i64..=2024,
            director in "[A-Za-z][A-Za-z .]{0,30}",
            duration in 1u64..100_000,
            genre in genre_strategy(),
        ) {
            let movie = validate_full(&payload(&title, year, &director, duration, &genre)).unwrap();
            prop_assert_eq!(movie.title, title);
            prop_assert_eq!(i64::from(movie.year), year);
            prop_assert_eq!(movie.director, director);
            prop_assert_eq!(movie.duration, duration);
            prop_assert_eq!(movie.rate, DEFAULT_RATE);
            prop_assert_eq!(movie.genre, genre);
        }

        /// Years outside the range always fail on `year`.
        #[test]
        fn out_of_range_year_fails(
            year in prop_oneof![i64::MIN / 2..1900i64, 2025i64..i64::MAX / 2],
        ) {
            let err = validate_full(&payload("T", year, "D", 100, &[])).unwrap_err();
            prop_assert!(err.has_path("year"));
            prop_assert_eq!(err.len(), 1);
        }

        /// Any valid field accepted by full mode is accepted alone by partial mode.
        #[test]
        fn partial_accepts_single_valid_year(year in 1900i64..=2024) {
            let patch = validate_partial(&json!({ "year": year })).unwrap();
            prop_assert_eq!(patch.year.map(i64::from), Some(year));
        }
    }
}
