/**
 * Notes Query and Create-Note Mutation
 *
 * GET /api/notes - list notes with their owners joined
 * POST /api/notes - create a note, fan it out, return it
 *
 * # Owner Join
 *
 * The notes query batches the join: distinct owner IDs are collected from
 * the note rows and resolved with a single lookup, so query count is bound
 * by two regardless of how many notes exist.
 *
 * # Create-then-announce
 *
 * The create-note mutation builds the owner-joined record once and uses
 * that identical value as both the published event payload and the
 * response body, so subscribers and the caller can never diverge.
 */
use axum::{extract::State, response::Json};
use std::collections::HashMap;
use uuid::Uuid;

use crate::backend::api::user_summary;
use crate::backend::db;
use crate::backend::error::ApiError;
use crate::backend::middleware::auth::CurrentPrincipal;
use crate::backend::server::state::AppState;
use crate::shared::event::{NoteEvent, NOTE_CREATED};
use crate::shared::types::{CreateNoteRequest, Note};

/// Notes query handler
///
/// Lists all notes in creation order, each with its owner joined.
pub async fn list_notes(State(state): State<AppState>) -> Result<Json<Vec<Note>>, ApiError> {
    let pool = state.pool()?;

    let notes = db::notes::list_notes(pool).await?;
    let owner_ids = distinct_owner_ids(&notes);
    let owners = db::users::get_users_by_ids(pool, &owner_ids).await?;

    Ok(Json(join_owners(&notes, &owners)?))
}

/// Collect distinct owner IDs, preserving first-seen order.
pub(crate) fn distinct_owner_ids(notes: &[db::notes::Note]) -> Vec<Uuid> {
    let mut seen = Vec::new();
    for note in notes {
        if !seen.contains(&note.user_id) {
            seen.push(note.user_id);
        }
    }
    seen
}

/// Join each note with its owner.
///
/// The foreign key guarantees owners exist, so an unresolved owner means
/// the two reads raced a direct storage mutation; that fails the operation
/// rather than fabricating a partial record.
pub(crate) fn join_owners(
    notes: &[db::notes::Note],
    owners: &[db::users::User],
) -> Result<Vec<Note>, ApiError> {
    let by_id: HashMap<Uuid, &db::users::User> =
        owners.iter().map(|user| (user.id, user)).collect();

    notes
        .iter()
        .map(|note| {
            let owner = by_id.get(&note.user_id).ok_or_else(|| {
                ApiError::internal(format!(
                    "note {} references missing owner {}",
                    note.id, note.user_id
                ))
            })?;
            Ok(Note {
                id: note.id.to_string(),
                title: note.title.clone(),
                content: note.content.clone(),
                user: user_summary(owner),
            })
        })
        .collect()
}

/// Create-note mutation handler
///
/// Persists the note, re-reads its owner, publishes the owner-joined
/// record to the fan-out hub, and returns the same record to the caller.
///
/// The request principal is available here but not enforced against the
/// supplied owner id.
///
/// # Errors
///
/// * `400 Bad Request` - empty title/content or malformed owner id
/// * `500 Internal Server Error` - storage failure (including an unknown
///   owner id, which violates the foreign key)
pub async fn create_note(
    State(state): State<AppState>,
    CurrentPrincipal(principal): CurrentPrincipal,
    Json(request): Json<CreateNoteRequest>,
) -> Result<Json<Note>, ApiError> {
    let pool = state.pool()?;

    if request.title.trim().is_empty() {
        return Err(ApiError::validation("title must not be empty"));
    }
    if request.content.trim().is_empty() {
        return Err(ApiError::validation("content must not be empty"));
    }
    let user_id = Uuid::parse_str(&request.user_id)
        .map_err(|_| ApiError::validation("userId must be a valid UUID"))?;

    tracing::debug!(
        "create note for owner {} (principal: {:?})",
        user_id,
        principal.user_id()
    );

    let row = db::notes::create_note(pool, &request.title, &request.content, user_id).await?;

    let owner = db::users::get_user_by_id(pool, row.user_id)
        .await?
        .ok_or_else(|| {
            ApiError::internal(format!("owner {} missing after insert", row.user_id))
        })?;

    // One joined record feeds both the event payload and the response.
    let note = Note {
        id: row.id.to_string(),
        title: row.title,
        content: row.content,
        user: user_summary(&owner),
    };

    let delivered = state
        .note_hub
        .publish(NOTE_CREATED, NoteEvent::note_created(&note));
    tracing::info!("note {} created, delivered to {} subscribers", note.id, delivered);

    Ok(Json(note))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn user_row(email: &str) -> db::users::User {
        db::users::User {
            id: Uuid::new_v4(),
            email: email.to_string(),
            name: None,
            password_hash: None,
            created_at: Utc::now(),
        }
    }

    fn note_row(title: &str, owner: Uuid) -> db::notes::Note {
        db::notes::Note {
            id: Uuid::new_v4(),
            title: title.to_string(),
            content: "body".to_string(),
            user_id: owner,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_distinct_owner_ids_dedupes() {
        let alice = Uuid::new_v4();
        let bob = Uuid::new_v4();
        let notes = vec![
            note_row("one", alice),
            note_row("two", bob),
            note_row("three", alice),
        ];

        let ids = distinct_owner_ids(&notes);
        assert_eq!(ids, vec![alice, bob]);
    }

    #[test]
    fn test_join_owners_maps_each_note_once() {
        let alice = user_row("a@x.com");
        let notes = vec![note_row("one", alice.id), note_row("two", alice.id)];

        let joined = join_owners(&notes, std::slice::from_ref(&alice)).unwrap();
        assert_eq!(joined.len(), 2);
        assert_eq!(joined[0].title, "one");
        assert_eq!(joined[0].user.email, "a@x.com");
        assert_eq!(joined[1].title, "two");
        assert_eq!(joined[1].user.email, "a@x.com");
    }

    #[test]
    fn test_join_owners_fails_on_missing_owner() {
        let notes = vec![note_row("orphan", Uuid::new_v4())];
        let result = join_owners(&notes, &[]);
        assert!(matches!(result, Err(ApiError::Internal { .. })));
    }
}
