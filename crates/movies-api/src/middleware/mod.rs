//! # Middleware Stack
//!
//! Tower middleware for the API layer:
//! - [`origin`]: origin allow-list guard and the matching CORS layer.

pub mod origin;
