//! Real-time Fan-out Module
//!
//! In-process publish/subscribe for note-created events plus the
//! Server-Sent Events handler that forwards them to connected clients.
//!
//! # Module Structure
//!
//! ```text
//! realtime/
//! ├── mod.rs          - Module exports
//! ├── hub.rs          - Topic-keyed fan-out registry
//! └── subscription.rs - SSE subscription handler
//! ```
//!
//! # Delivery Model
//!
//! At-most-once, no backlog: a subscriber registered after an event was
//! published never sees it, and a subscriber that falls behind skips
//! events rather than stalling the publisher. Reconnecting clients miss
//! whatever was published during the gap.

/// Topic-keyed fan-out registry
pub mod hub;

/// SSE subscription handler
pub mod subscription;

// Re-export commonly used types
pub use hub::NoteHub;
pub use subscription::handle_notes_subscription;
