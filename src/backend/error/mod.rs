//! Backend Error Module
//!
//! This module defines the error type returned by all API handlers and its
//! conversion into HTTP responses.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports
//! ├── types.rs      - Error type definition and status mapping
//! └── conversion.rs - IntoResponse implementation
//! ```
//!
//! # Taxonomy
//!
//! - `Validation` - rejected input (400)
//! - `Unauthorized` - bad credentials or missing identity (401)
//! - `NotFound` - referenced record gone (404)
//! - `Conflict` - uniqueness violation caught before storage (409)
//! - `Unavailable` - storage not configured (503)
//! - `Database` / `Hash` / `Token` / `Internal` - server faults (500);
//!   logged with their cause, surfaced to callers as a generic message

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::ApiError;
