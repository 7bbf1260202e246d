/**
 * Application State
 *
 * The central state container handed to the router. It holds the database
 * pool and the note fan-out hub; `FromRef` implementations let handlers
 * extract just the part they need.
 *
 * # Thread Safety
 *
 * - `PgPool` is internally shared and clone-cheap
 * - `NoteHub` clones share one mutex-guarded registry
 */
use axum::extract::FromRef;
use sqlx::PgPool;

use crate::backend::error::ApiError;
use crate::backend::realtime::hub::NoteHub;

/// Application state shared by all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    ///
    /// `None` when `DATABASE_URL` is not set; storage-backed handlers then
    /// answer 503 instead of the process refusing to start. The fan-out
    /// pipeline works either way.
    pub db_pool: Option<PgPool>,

    /// Note fan-out hub, created at server start and torn down with this
    /// state at shutdown
    pub note_hub: NoteHub,
}

impl AppState {
    pub fn new(db_pool: Option<PgPool>) -> Self {
        Self {
            db_pool,
            note_hub: NoteHub::new(),
        }
    }

    /// The pool, or the 503-class error every storage-backed handler
    /// reports when storage is not configured.
    pub fn pool(&self) -> Result<&PgPool, ApiError> {
        self.db_pool
            .as_ref()
            .ok_or_else(|| ApiError::unavailable("storage not configured"))
    }
}

/// Allow handlers to extract the hub directly.
impl FromRef<AppState> for NoteHub {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.note_hub.clone()
    }
}

/// Allow handlers to extract the optional pool directly.
impl FromRef<AppState> for Option<PgPool> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.db_pool.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_errors_when_unconfigured() {
        let state = AppState::new(None);
        assert!(matches!(
            state.pool(),
            Err(ApiError::Unavailable { .. })
        ));
    }

    #[test]
    fn test_clones_share_the_hub_registry() {
        let state = AppState::new(None);
        let clone = state.clone();

        let _receiver = state.note_hub.subscribe("t");
        assert_eq!(clone.note_hub.subscriber_count("t"), 1);
    }
}
