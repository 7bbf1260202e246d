/**
 * Notes Feed
 *
 * The live notes list a client displays: seeded from the notes query,
 * then extended by subscription deliveries. Merging is append-only with
 * no dedupe by id - the delivery model is at-most-once, and a duplicate
 * delivery (e.g. after a reconnect race) simply appends again.
 */
use crate::shared::types::Note;

/// Append-only notes list.
#[derive(Debug, Clone, Default)]
pub struct NotesFeed {
    items: Vec<Note>,
}

impl NotesFeed {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the list from a notes query result.
    pub fn set_notes(&mut self, notes: Vec<Note>) {
        self.items = notes;
    }

    /// Merge one subscription delivery into the list.
    ///
    /// A null delivery (malformed envelope) is ignored.
    ///
    /// # Returns
    ///
    /// Whether a note was appended.
    pub fn apply_event(&mut self, event: Option<Note>) -> bool {
        match event {
            Some(note) => {
                self.items.push(note);
                true
            }
            None => false,
        }
    }

    pub fn items(&self) -> &[Note] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::types::UserSummary;

    fn sample_note(id: &str) -> Note {
        Note {
            id: id.to_string(),
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
    fn test_set_then_append() {
        let mut feed = NotesFeed::new();
        feed.set_notes(vec![sample_note("n1")]);
        assert!(feed.apply_event(Some(sample_note("n2"))));

        assert_eq!(feed.len(), 2);
        assert_eq!(feed.items()[0].id, "n1");
        assert_eq!(feed.items()[1].id, "n2");
    }

    #[test]
    fn test_null_delivery_is_ignored() {
        let mut feed = NotesFeed::new();
        assert!(!feed.apply_event(None));
        assert!(feed.is_empty());
    }

    #[test]
    fn test_duplicate_delivery_appends_twice() {
        // No dedupe by id: the at-most-once model makes duplicates a
        // display artifact, not an error.
        let mut feed = NotesFeed::new();
        feed.apply_event(Some(sample_note("n1")));
        feed.apply_event(Some(sample_note("n1")));
        assert_eq!(feed.len(), 2);
    }
}
