/**
 * Note Rows and Queries
 *
 * Database operations for the notes table. Notes are insert-only; there is
 * no update or delete path.
 */
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

/// Note row as stored.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Note {
    /// Unique note ID (UUID)
    pub id: Uuid,
    /// Note title
    pub title: String,
    /// Note body
    pub content: String,
    /// Owning user
    pub user_id: Uuid,
    /// Created at timestamp (creation order)
    pub created_at: DateTime<Utc>,
}

/// List all notes in creation order.
pub async fn list_notes(pool: &PgPool) -> Result<Vec<Note>, sqlx::Error> {
    sqlx::query_as::<_, Note>(
        r#"
        SELECT id, title, content, user_id, created_at
        FROM notes
        ORDER BY created_at
        "#,
    )
    .fetch_all(pool)
    .await
}

/// List one user's notes in creation order.
pub async fn notes_by_user(pool: &PgPool, user_id: Uuid) -> Result<Vec<Note>, sqlx::Error> {
    sqlx::query_as::<_, Note>(
        r#"
        SELECT id, title, content, user_id, created_at
        FROM notes
        WHERE user_id = $1
        ORDER BY created_at
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
}

/// Insert a note, returning the created row.
///
/// The foreign key on `user_id` means inserting for a nonexistent owner
/// fails with a constraint violation, which propagates as a storage error.
pub async fn create_note(
    pool: &PgPool,
    title: &str,
    content: &str,
    user_id: Uuid,
) -> Result<Note, sqlx::Error> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    sqlx::query_as::<_, Note>(
        r#"
        INSERT INTO notes (id, title, content, user_id, created_at)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, title, content, user_id, created_at
        "#,
    )
    .bind(id)
    .bind(title)
    .bind(content)
    .bind(user_id)
    .bind(now)
    .fetch_one(pool)
    .await
}
