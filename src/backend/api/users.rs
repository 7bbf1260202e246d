/**
 * Users Query and Create-User Mutation
 *
 * GET /api/users - list users, optionally with each user's notes nested
 * POST /api/users - legacy unauthenticated user creation (no password)
 */
use axum::{
    extract::{Query, State},
    response::Json,
};
use serde::Deserialize;
use std::collections::HashMap;
use uuid::Uuid;

use crate::backend::api::{note_summary, user_summary};
use crate::backend::db;
use crate::backend::error::ApiError;
use crate::backend::server::state::AppState;
use crate::shared::types::{CreateUserRequest, UserSummary, UserWithNotes};

/// Query parameters for the users query.
#[derive(Debug, Deserialize)]
pub struct UsersQuery {
    /// Nest each user's notes in the response (default true)
    #[serde(default = "default_include_notes")]
    pub include_notes: bool,
}

fn default_include_notes() -> bool {
    true
}

/// Users query handler
///
/// Lists all users. With `include_notes` (the default), all notes are
/// loaded in one query and grouped by owner in memory, so the query count
/// stays at two regardless of how many users or notes exist.
pub async fn list_users(
    State(state): State<AppState>,
    Query(query): Query<UsersQuery>,
) -> Result<Json<Vec<UserWithNotes>>, ApiError> {
    let pool = state.pool()?;

    let users = db::users::list_users(pool).await?;

    if !query.include_notes {
        let response = users
            .iter()
            .map(|user| UserWithNotes {
                id: user.id.to_string(),
                email: user.email.clone(),
                name: user.name.clone(),
                notes: None,
            })
            .collect();
        return Ok(Json(response));
    }

    let notes = db::notes::list_notes(pool).await?;
    Ok(Json(group_notes_by_owner(&users, &notes)))
}

/// Nest notes under their owners.
///
/// Every user appears in the output, with an empty list when they own no
/// notes. Note order within a user follows the input (creation) order.
pub(crate) fn group_notes_by_owner(
    users: &[db::users::User],
    notes: &[db::notes::Note],
) -> Vec<UserWithNotes> {
    let mut by_owner: HashMap<Uuid, Vec<_>> = HashMap::new();
    for note in notes {
        by_owner.entry(note.user_id).or_default().push(note_summary(note));
    }

    users
        .iter()
        .map(|user| UserWithNotes {
            id: user.id.to_string(),
            email: user.email.clone(),
            name: user.name.clone(),
            notes: Some(by_owner.remove(&user.id).unwrap_or_default()),
        })
        .collect()
}

/// Create-user mutation handler (legacy unauthenticated path)
///
/// Creates a user with no credentials. Retained alongside register for
/// backward compatibility; such users cannot log in.
///
/// # Errors
///
/// * `400 Bad Request` - empty email
/// * `500 Internal Server Error` - storage failure (including the unique
///   constraint on email)
pub async fn create_user(
    State(state): State<AppState>,
    Json(request): Json<CreateUserRequest>,
) -> Result<Json<UserSummary>, ApiError> {
    let pool = state.pool()?;

    if request.email.trim().is_empty() {
        return Err(ApiError::validation("email must not be empty"));
    }

    let user = db::users::create_user(pool, &request.email, request.name.as_deref(), None).await?;

    tracing::info!("user created (legacy path): {} ({})", user.id, user.email);

    Ok(Json(user_summary(&user)))
}
