//! Shared Types
//!
//! This module contains the types that cross the wire between the server
//! and the client: user and note shapes, auth request/response bodies, and
//! the note-created event envelope used by the fan-out hub.
//!
//! # Module Structure
//!
//! ```text
//! shared/
//! ├── mod.rs    - Module exports
//! ├── types.rs  - Wire shapes for users, notes, auth
//! └── event.rs  - Note-created event envelope
//! ```

/// Wire shapes for users, notes, and auth
pub mod types;

/// Note-created event envelope
pub mod event;

// Re-export commonly used types
pub use event::{NoteEvent, NOTE_CREATED};
pub use types::{
    AuthResponse, CreateNoteRequest, CreateUserRequest, LoginRequest, Note, NoteSummary,
    RegisterRequest, UserSummary, UserWithNotes,
};
