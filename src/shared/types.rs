/**
 * Wire Types
 *
 * Request and response shapes shared by the server handlers and the client.
 * Identifiers travel as strings; multi-word fields are camelCase on the wire.
 */
use serde::{Deserialize, Serialize};

/// A user as it appears inside a note's owner join or an auth response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserSummary {
    /// Unique user ID (UUID, stringified)
    pub id: String,
    /// User email address
    pub email: String,
    /// Optional display name
    pub name: Option<String>,
}

/// A note without its owner join, nested under a user in the users query.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NoteSummary {
    pub id: String,
    pub title: String,
    pub content: String,
}

/// A note with its owner joined. This is the shape returned by the notes
/// query, the create-note mutation, and the note-created subscription.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Note {
    pub id: String,
    pub title: String,
    pub content: String,
    /// The owning user, resolved at read time
    pub user: UserSummary,
}

/// A user with their notes nested, as returned by the users query.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserWithNotes {
    pub id: String,
    pub email: String,
    pub name: Option<String>,
    /// Omitted entirely when the caller asked for users only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<Vec<NoteSummary>>,
}

/// Create user request (legacy unauthenticated path, no password).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUserRequest {
    pub email: String,
    pub name: Option<String>,
}

/// Register request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub name: Option<String>,
    /// Hashed before storage, never persisted in the clear
    pub password: String,
}

/// Login request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Create note request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateNoteRequest {
    pub title: String,
    pub content: String,
    /// Owner of the new note
    pub user_id: String,
}

/// Auth response returned by register and login.
///
/// Contains the session token and the user it identifies. The token expires
/// after one hour; callers re-authenticate to obtain a fresh one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: UserSummary,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_note_request_wire_field_names() {
        let request: CreateNoteRequest = serde_json::from_str(
            r#"{"title":"T","content":"C","userId":"abc"}"#,
        )
        .unwrap();
        assert_eq!(request.user_id, "abc");

        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains("userId"));
    }

    #[test]
    fn test_user_with_notes_omits_absent_notes() {
        let user = UserWithNotes {
            id: "u1".to_string(),
            email: "a@x.com".to_string(),
            name: None,
            notes: None,
        };
        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("notes"));
    }

    #[test]
    fn test_note_roundtrip() {
        let note = Note {
            id: "n1".to_string(),
            title: "Title1".to_string(),
            content: "Body1".to_string(),
            user: UserSummary {
                id: "u1".to_string(),
                email: "a@x.com".to_string(),
                name: Some("A".to_string()),
            },
        };
        let json = serde_json::to_string(&note).unwrap();
        let deserialized: Note = serde_json::from_str(&json).unwrap();
        assert_eq!(note, deserialized);
    }
}
