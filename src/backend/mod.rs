//! Backend Module
//!
//! This module contains all server-side code for the collab-notes service.
//! It provides an Axum HTTP server exposing query and mutation routes plus a
//! Server-Sent Events subscription for newly created notes.
//!
//! # Architecture
//!
//! The backend is organized into focused submodules:
//!
//! - **`server`** - Server initialization, application state, configuration
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`db`** - Persistence gateway: parameterized reads/writes (PostgreSQL)
//! - **`auth`** - Credential service: bcrypt hashing, JWT tokens, handlers
//! - **`api`** - Query and mutation handlers for users and notes
//! - **`realtime`** - Note fan-out hub and SSE subscription handler
//! - **`middleware`** - Bearer-token identity middleware
//! - **`error`** - Backend error types
//!
//! # State Management
//!
//! Shared state (`AppState`) holds the database pool and the fan-out hub.
//! The hub is created at server start, owned by the state, and passed by
//! reference into handlers; it is never ambient global state.
//!
//! # Fan-out
//!
//! The create-note mutation persists the note, re-reads it joined with its
//! owner, publishes the joined record to the hub, and returns the identical
//! record to the caller. Each open subscription connection holds one
//! receiver; delivery to a slow or closed receiver never blocks the
//! mutation response or delivery to other subscribers.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Persistence gateway
pub mod db;

/// Authentication and user management
pub mod auth;

/// Query and mutation handlers
pub mod api;

/// Note fan-out hub and subscription handler
pub mod realtime;

/// Request identity middleware
pub mod middleware;

/// Backend error types
pub mod error;

// Re-export commonly used types
pub use error::ApiError;
pub use realtime::hub::NoteHub;
pub use server::state::AppState;
