//! Collab Notes - Main Library
//!
//! A collaborative notes service: clients register, log in, create notes,
//! and observe a live-updating stream of newly created notes over a
//! persistent subscription connection.
//!
//! # Module Structure
//!
//! The library is organized into three main modules:
//!
//! - **`shared`** - Types shared between the server and the client
//!   - Wire shapes for users, notes, and auth responses
//!   - The note-created event envelope
//!
//! - **`backend`** - Server-side code
//!   - Axum HTTP server with query/mutation routes and an SSE subscription
//!   - PostgreSQL persistence via sqlx
//!   - bcrypt password hashing and JWT session tokens
//!   - In-process note fan-out hub
//!
//! - **`client`** - Headless client session
//!   - Durable session state (token, selected owner)
//!   - reqwest transport for queries/mutations
//!   - SSE transport for the note-created subscription
//!
//! # Thread Safety
//!
//! Server state is shared across handlers with `Arc` and a mutex-guarded
//! registry; fan-out uses `tokio::sync::broadcast` so a slow subscriber
//! never blocks a publisher.

/// Types shared between server and client
pub mod shared;

/// Backend server-side code
pub mod backend;

/// Headless client session
pub mod client;
