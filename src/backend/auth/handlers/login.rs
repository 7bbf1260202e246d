/**
 * Login Handler
 *
 * POST /api/auth/login
 *
 * # Authentication Process
 *
 * 1. Look up user by email
 * 2. Verify password with bcrypt
 * 3. Issue a session token
 * 4. Return token and user info
 *
 * # Security
 *
 * Unknown email, a legacy user without credentials, and a wrong password
 * all produce the same "invalid credentials" error, so callers cannot
 * enumerate accounts. Failures are authentication errors, never crashes.
 */
use axum::{extract::State, response::Json};

use crate::backend::api::user_summary;
use crate::backend::auth::passwords::verify_password;
use crate::backend::auth::sessions::create_token;
use crate::backend::db::users::get_user_by_email;
use crate::backend::error::ApiError;
use crate::backend::server::state::AppState;
use crate::shared::types::{AuthResponse, LoginRequest};

/// Login handler
///
/// Verifies email and password and returns a session token on success.
///
/// # Errors
///
/// * `401 Unauthorized` - unknown email, passwordless user, or wrong password
/// * `500 Internal Server Error` - storage or token failure
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    let pool = state.pool()?;
    tracing::info!("login request for: {}", request.email);

    let user = get_user_by_email(pool, &request.email)
        .await?
        .ok_or_else(|| {
            tracing::warn!("login for unknown email: {}", request.email);
            ApiError::unauthorized("invalid credentials")
        })?;

    // Users created through the legacy unauthenticated path have no
    // credentials and cannot log in.
    let password_hash = user.password_hash.as_deref().ok_or_else(|| {
        tracing::warn!("login for passwordless user: {}", user.id);
        ApiError::unauthorized("invalid credentials")
    })?;

    let valid = verify_password(&request.password, password_hash)?;
    if !valid {
        tracing::warn!("invalid password for user: {}", user.id);
        return Err(ApiError::unauthorized("invalid credentials"));
    }

    let token = create_token(user.id, user.email.clone())?;

    tracing::info!("user logged in: {} ({})", user.id, user.email);

    Ok(Json(AuthResponse {
        token,
        user: user_summary(&user),
    }))
}
