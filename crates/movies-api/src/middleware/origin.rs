//! # Origin Allow-List
//!
//! Browsers send an `Origin` header on cross-origin requests. Requests
//! without one (curl, server-to-server, same-origin navigation) pass
//! through. Requests whose origin is on the list pass through and get CORS
//! response headers from [`cors_layer`]. Everything else is answered with
//! 403 by [`origin_guard`] before any handler runs.

use std::sync::Arc;

use axum::extract::Request;
use axum::http::{header, HeaderValue, Method};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum::Extension;
use thiserror::Error;
use tower_http::cors::{AllowOrigin, CorsLayer};

use crate::error::AppError;

/// Origins accepted when none are configured.
pub const DEFAULT_ALLOWED_ORIGINS: [&str; 4] = [
    "http://localhost:8080",
    "http://localhost:1234",
    "http://localhost:8081",
    "http://movies.com",
];

/// A configured origin that cannot be used.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidOrigin {
    #[error("origin {0:?} is not a valid header value")]
    NotHeaderValue(String),

    #[error("wildcard origin is not supported; list origins explicitly")]
    Wildcard,
}

/// Exact-match set of accepted `Origin` header values.
///
/// Cheaply cloneable via `Arc`.
#[derive(Debug, Clone)]
pub struct AllowedOrigins {
    origins: Arc<[HeaderValue]>,
}

impl AllowedOrigins {
    /// Parse configured origins. Blank entries are skipped.
    pub fn parse<I, S>(origins: I) -> Result<Self, InvalidOrigin>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut parsed = Vec::new();
        for origin in origins {
            let origin = origin.as_ref().trim();
            if origin.is_empty() {
                continue;
            }
            if origin == "*" {
                return Err(InvalidOrigin::Wildcard);
            }
            let value = HeaderValue::from_str(origin)
                .map_err(|_| InvalidOrigin::NotHeaderValue(origin.to_string()))?;
            parsed.push(value);
        }
        Ok(Self {
            origins: parsed.into(),
        })
    }

    pub fn contains(&self, origin: &HeaderValue) -> bool {
        self.origins.iter().any(|o| o == origin)
    }

    pub fn iter(&self) -> impl Iterator<Item = &HeaderValue> {
        self.origins.iter()
    }
}

impl Default for AllowedOrigins {
    fn default() -> Self {
        Self {
            origins: DEFAULT_ALLOWED_ORIGINS
                .into_iter()
                .map(HeaderValue::from_static)
                .collect(),
        }
    }
}

/// CORS response headers for allowed origins.
pub fn cors_layer(origins: &AllowedOrigins) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins.iter().cloned()))
        .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE])
}

/// Reject requests from origins outside the allow-list.
pub async fn origin_guard(
    Extension(origins): Extension<AllowedOrigins>,
    request: Request,
    next: Next,
) -> Response {
    if let Some(origin) = request.headers().get(header::ORIGIN) {
        if !origin.is_empty() && !origins.contains(origin) {
            tracing::warn!(
                ?origin,
                method = %request.method(),
                path = %request.uri().path(),
                "rejected request from disallowed origin"
            );
            return AppError::OriginRejected.into_response();
        }
    }
    next.run(request).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_list_has_known_origins() {
        let origins = AllowedOrigins::default();
        assert!(origins.contains(&HeaderValue::from_static("http://movies.com")));
        assert!(origins.contains(&HeaderValue::from_static("http://localhost:1234")));
        assert!(!origins.contains(&HeaderValue::from_static("http://evil.com")));
    }

    #[test]
    fn parse_skips_blank_entries() {
        let origins = AllowedOrigins::parse(["http://a.test", " ", ""]).unwrap();
        assert_eq!(origins.iter().count(), 1);
    }

    #[test]
    fn parse_trims_entries() {
        let origins = AllowedOrigins::parse([" http://a.test "]).unwrap();
        assert!(origins.contains(&HeaderValue::from_static("http://a.test")));
    }

    #[test]
    fn parse_rejects_wildcard() {
        assert_eq!(
            AllowedOrigins::parse(["*"]).unwrap_err(),
            InvalidOrigin::Wildcard
        );
    }

    #[test]
    fn parse_rejects_control_characters() {
        assert!(matches!(
            AllowedOrigins::parse(["http://a\u{7f}.test"]),
            Err(InvalidOrigin::NotHeaderValue(_))
        ));
    }

    #[test]
    fn matching_is_exact() {
        let origins = AllowedOrigins::parse(["http://a.test"]).unwrap();
        assert!(!origins.contains(&HeaderValue::from_static("http://a.test/")));
        assert!(!origins.contains(&HeaderValue::from_static("https://a.test")));
    }
}
