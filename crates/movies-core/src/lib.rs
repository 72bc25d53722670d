//! # movies-core — Domain Types for the Movies Service
//!
//! Everything the service knows about movies lives here; the HTTP shell in
//! `movies-api` only translates requests into calls on this crate.
//!
//! ## Key Design Principles
//!
//! 1. **Validate at the edge.** [`schema::validate_full`] and
//!    [`schema::validate_partial`] are the only checks on field constraints.
//!    [`MovieStore`] trusts its caller: it stores whatever [`NewMovie`] or
//!    [`MoviePatch`] it is handed.
//!
//! 2. **Deterministic error reports.** Validation collects every
//!    [`FieldError`] in field declaration order, not failure order.
//!
//! 3. **Single owner.** The collection lives inside one [`MovieStore`];
//!    mutations serialize behind its write lock.
//!
//! ## Crate Policy
//!
//! - No HTTP types. No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod error;
pub mod genre;
pub mod identity;
pub mod movie;
pub mod schema;
pub mod seed;
pub mod store;

// Re-export primary types for ergonomic imports.
pub use error::{FieldError, FieldErrorCode, SeedError, StoreError, ValidationErrors};
pub use genre::Genre;
pub use identity::MovieId;
pub use movie::{MoviePatch, MovieRecord, NewMovie, DEFAULT_RATE};
pub use schema::{validate_full, validate_partial};
pub use store::MovieStore;
