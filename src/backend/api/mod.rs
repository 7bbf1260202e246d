//! API Module
//!
//! Query and mutation handlers for users and notes, plus the row-to-wire
//! conversions shared by the auth handlers.
//!
//! # Module Structure
//!
//! ```text
//! api/
//! ├── mod.rs   - Module exports, row-to-wire conversions
//! ├── users.rs - Users query, create-user mutation
//! └── notes.rs - Notes query, create-note mutation
//! ```

use crate::backend::db;
use crate::shared::types::{NoteSummary, UserSummary};

/// Users query and create-user mutation
pub mod users;

/// Notes query and create-note mutation
pub mod notes;

pub use notes::{create_note, list_notes};
pub use users::{create_user, list_users};

/// Shape a user row for the wire (drops the password hash).
pub(crate) fn user_summary(user: &db::users::User) -> UserSummary {
    UserSummary {
        id: user.id.to_string(),
        email: user.email.clone(),
        name: user.name.clone(),
    }
}

/// Shape a note row for nesting under its owner (no owner join).
pub(crate) fn note_summary(note: &db::notes::Note) -> NoteSummary {
    NoteSummary {
        id: note.id.to_string(),
        title: note.title.clone(),
        content: note.content.clone(),
    }
}
