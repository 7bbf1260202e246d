/**
 * Register Handler
 *
 * POST /api/auth/register
 *
 * # Registration Process
 *
 * 1. Validate email shape and password length
 * 2. Reject duplicate email with a conflict error
 * 3. Hash password with bcrypt
 * 4. Persist the user
 * 5. Issue a session token
 * 6. Return token and user info
 */
use axum::{extract::State, response::Json};

use crate::backend::api::user_summary;
use crate::backend::auth::passwords::hash_password;
use crate::backend::auth::sessions::create_token;
use crate::backend::db::users::{create_user, get_user_by_email};
use crate::backend::error::ApiError;
use crate::backend::server::state::AppState;
use crate::shared::types::{AuthResponse, RegisterRequest};

/// Minimum accepted password length.
const MIN_PASSWORD_LENGTH: usize = 8;

/// Validate registration input.
///
/// Email must look like an email (contains '@'); the password must meet the
/// minimum length. The unique constraint on email is checked separately.
pub(crate) fn validate_registration(email: &str, password: &str) -> Result<(), ApiError> {
    if !email.contains('@') {
        return Err(ApiError::validation("invalid email format"));
    }
    if password.len() < MIN_PASSWORD_LENGTH {
        return Err(ApiError::validation(format!(
            "password must be at least {} characters",
            MIN_PASSWORD_LENGTH
        )));
    }
    Ok(())
}

/// Register handler
///
/// Creates a user with credentials and returns a session token for
/// immediate authentication.
///
/// # Errors
///
/// * `400 Bad Request` - invalid email format or short password
/// * `409 Conflict` - email already registered
/// * `500 Internal Server Error` - hashing, storage, or token failure
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    let pool = state.pool()?;
    tracing::info!("register request for: {}", request.email);

    validate_registration(&request.email, &request.password)?;

    if get_user_by_email(pool, &request.email).await?.is_some() {
        tracing::warn!("email already registered: {}", request.email);
        return Err(ApiError::conflict("email already registered"));
    }

    let password_hash = hash_password(&request.password)?;

    let user = create_user(
        pool,
        &request.email,
        request.name.as_deref(),
        Some(&password_hash),
    )
    .await?;

    let token = create_token(user.id, user.email.clone())?;

    tracing::info!("user registered: {} ({})", user.id, user.email);

    Ok(Json(AuthResponse {
        token,
        user: user_summary(&user),
    }))
}
