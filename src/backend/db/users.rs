/**
 * User Rows and Queries
 *
 * Database operations for the users table. Rows come back untransformed;
 * shaping for the wire happens in the API layer.
 */
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

/// User row as stored.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    /// Unique user ID (UUID)
    pub id: Uuid,
    /// Email address (unique)
    pub email: String,
    /// Optional display name
    pub name: Option<String>,
    /// Hashed password (bcrypt); absent for legacy unauthenticated records
    pub password_hash: Option<String>,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
}

/// List all users.
pub async fn list_users(pool: &PgPool) -> Result<Vec<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        SELECT id, email, name, password_hash, created_at
        FROM users
        ORDER BY created_at
        "#,
    )
    .fetch_all(pool)
    .await
}

/// Get a user by ID.
///
/// # Returns
/// User or None if not found
pub async fn get_user_by_id(pool: &PgPool, id: Uuid) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        SELECT id, email, name, password_hash, created_at
        FROM users
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Get a user by email.
///
/// # Returns
/// User or None if not found
pub async fn get_user_by_email(pool: &PgPool, email: &str) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        SELECT id, email, name, password_hash, created_at
        FROM users
        WHERE email = $1
        "#,
    )
    .bind(email)
    .fetch_optional(pool)
    .await
}

/// Get all users whose ID is in `ids`, in one round trip.
///
/// Used by the notes query to batch the owner join: one lookup for all
/// distinct owner IDs instead of one per note.
pub async fn get_users_by_ids(pool: &PgPool, ids: &[Uuid]) -> Result<Vec<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        SELECT id, email, name, password_hash, created_at
        FROM users
        WHERE id = ANY($1)
        "#,
    )
    .bind(ids)
    .fetch_all(pool)
    .await
}

/// Insert a user, returning the created row.
///
/// # Arguments
/// * `pool` - Database connection pool
/// * `email` - Email address (schema enforces uniqueness)
/// * `name` - Optional display name
/// * `password_hash` - Hashed password; None for the legacy path
pub async fn create_user(
    pool: &PgPool,
    email: &str,
    name: Option<&str>,
    password_hash: Option<&str>,
) -> Result<User, sqlx::Error> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (id, email, name, password_hash, created_at)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, email, name, password_hash, created_at
        "#,
    )
    .bind(id)
    .bind(email)
    .bind(name)
    .bind(password_hash)
    .bind(now)
    .fetch_one(pool)
    .await
}
