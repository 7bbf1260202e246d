/**
 * Note Event Envelope
 *
 * This module defines the event envelope published through the note fan-out
 * hub and forwarded to subscription connections.
 *
 * # Envelope Semantics
 *
 * The payload carries the owner-joined note as a JSON value. Subscribers
 * unwrap the envelope back into a `Note`; a payload that does not decode is
 * delivered as null rather than dropping the connection.
 */
use crate::shared::types::Note;
use serde::{Deserialize, Serialize};

/// The single topic used by the note fan-out hub.
pub const NOTE_CREATED: &str = "note_created";

/// An event delivered to every subscriber of a topic.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NoteEvent {
    /// Topic the event was published under
    pub topic: String,
    /// Event payload (the owner-joined note, as JSON)
    pub payload: serde_json::Value,
    /// Timestamp when the event was published (RFC3339)
    pub timestamp: String,
}

impl NoteEvent {
    /// Create a new event on a topic with an arbitrary payload.
    pub fn new(topic: impl Into<String>, payload: serde_json::Value) -> Self {
        Self {
            topic: topic.into(),
            payload,
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// Create a note-created event from an owner-joined note.
    pub fn note_created(note: &Note) -> Self {
        let payload = serde_json::to_value(note).unwrap_or(serde_json::Value::Null);
        Self::new(NOTE_CREATED, payload)
    }

    /// Unwrap the envelope back into a note.
    ///
    /// Returns `None` when the payload is malformed; the subscription layer
    /// forwards that as null instead of failing the connection.
    pub fn note(&self) -> Option<Note> {
        serde_json::from_value(self.payload.clone()).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::types::UserSummary;

    fn sample_note() -> Note {
        Note {
            id: "n1".to_string(),
            title: "Title1".to_string(),
            content: "Body1".to_string(),
            user: UserSummary {
                id: "u1".to_string(),
                email: "a@x.com".to_string(),
                name: None,
            },
        }
    }

    #[test]
    fn test_note_created_unwraps_to_note() {
        let note = sample_note();
        let event = NoteEvent::note_created(&note);
        assert_eq!(event.topic, NOTE_CREATED);
        assert_eq!(event.note(), Some(note));
        assert!(!event.timestamp.is_empty());
    }

    #[test]
    fn test_malformed_payload_unwraps_to_none() {
        let event = NoteEvent::new(NOTE_CREATED, serde_json::json!({"bogus": true}));
        assert_eq!(event.note(), None);
    }

    #[test]
    fn test_null_payload_unwraps_to_none() {
        let event = NoteEvent::new(NOTE_CREATED, serde_json::Value::Null);
        assert_eq!(event.note(), None);
    }

    #[test]
    fn test_event_serialization_roundtrip() {
        let event = NoteEvent::note_created(&sample_note());
        let json = serde_json::to_string(&event).unwrap();
        let deserialized: NoteEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, deserialized);
    }
}
