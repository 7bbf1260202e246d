/**
 * Current User Handler
 *
 * GET /api/auth/me
 *
 * Returns the authenticated caller's user record. This is the one endpoint
 * whose output is defined by the token identity, so an anonymous principal
 * is rejected here rather than in middleware.
 */
use axum::{extract::State, response::Json};

use crate::backend::api::user_summary;
use crate::backend::db::users::get_user_by_id;
use crate::backend::error::ApiError;
use crate::backend::middleware::auth::{CurrentPrincipal, Principal};
use crate::backend::server::state::AppState;
use crate::shared::types::UserSummary;

/// Current user handler
///
/// # Errors
///
/// * `401 Unauthorized` - no valid bearer token on the request
/// * `404 Not Found` - token subject no longer exists in storage
/// * `500 Internal Server Error` - storage failure
pub async fn me(
    State(state): State<AppState>,
    CurrentPrincipal(principal): CurrentPrincipal,
) -> Result<Json<UserSummary>, ApiError> {
    let pool = state.pool()?;

    let Principal::Authenticated { user_id, .. } = principal else {
        return Err(ApiError::unauthorized("authentication required"));
    };

    let user = get_user_by_id(pool, user_id).await?.ok_or_else(|| {
        tracing::warn!("token subject not found: {}", user_id);
        ApiError::not_found("user not found")
    })?;

    Ok(Json(user_summary(&user)))
}
