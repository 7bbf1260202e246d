//! Routes Module
//!
//! Router assembly: all HTTP routes plus the middleware stack.

/// Router assembly
pub mod router;

pub use router::create_router;
