//! Client Session Module
//!
//! A headless client for the collab-notes server: durable session state,
//! a request/response transport for queries and mutations, and a
//! persistent SSE transport for the note-created subscription. The
//! transport is selected by operation kind - queries and mutations go
//! over plain HTTP, the subscription holds one long-lived connection.
//!
//! # Module Structure
//!
//! ```text
//! client/
//! ├── mod.rs          - Module exports
//! ├── error.rs        - Client error types
//! ├── config.rs       - Server URL configuration
//! ├── session.rs      - Durable session state (token, selected owner)
//! ├── api.rs          - Queries and mutations over reqwest
//! ├── subscription.rs - SSE subscription transport
//! └── notes.rs        - Live notes feed (append-only merge)
//! ```

/// Client error types
pub mod error;

/// Server URL configuration
pub mod config;

/// Durable session state
pub mod session;

/// Queries and mutations
pub mod api;

/// SSE subscription transport
pub mod subscription;

/// Live notes feed
pub mod notes;

// Re-export commonly used types
pub use api::ApiClient;
pub use config::ClientConfig;
pub use error::ClientError;
pub use notes::NotesFeed;
pub use session::{Session, SessionStore};
pub use subscription::NoteSubscription;
