//! Middleware Module
//!
//! Request-processing middleware. Currently one concern: resolving an
//! optional bearer token into a request principal.

/// Bearer-token identity middleware
pub mod auth;

pub use auth::{identity_middleware, CurrentPrincipal, Principal};
