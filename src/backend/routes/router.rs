/**
 * Router Configuration
 *
 * Combines all routes and middleware into the application router.
 *
 * # Routes
 *
 * ## Queries
 * - `GET /api/users` - list users (nested notes by default)
 * - `GET /api/notes` - list notes with owners joined
 *
 * ## Mutations
 * - `POST /api/users` - legacy unauthenticated user creation
 * - `POST /api/notes` - create a note and fan it out
 * - `POST /api/auth/register` - register with credentials
 * - `POST /api/auth/login` - log in
 *
 * ## Subscriptions
 * - `GET /subscriptions/notes` - SSE stream of newly created notes
 *
 * ## Misc
 * - `GET /api/auth/me` - current user (requires bearer token)
 *
 * # Middleware
 *
 * Identity resolution runs on every request; CORS allows the browser
 * client through; the panic-catching layer converts any uncaught failure
 * into a 500 so the process keeps serving.
 */
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;

use crate::backend::api::{create_note, create_user, list_notes, list_users};
use crate::backend::auth::{login, me, register};
use crate::backend::middleware::auth::identity_middleware;
use crate::backend::realtime::subscription::handle_notes_subscription;
use crate::backend::server::state::AppState;

/// Create the application router with all routes configured.
pub fn create_router(app_state: AppState) -> Router<()> {
    Router::new()
        .route("/api/users", get(list_users).post(create_user))
        .route("/api/notes", get(list_notes).post(create_note))
        .route("/api/auth/register", post(register))
        .route("/api/auth/login", post(login))
        .route("/api/auth/me", get(me))
        .route("/subscriptions/notes", get(handle_notes_subscription))
        .layer(axum::middleware::from_fn(identity_middleware))
        .layer(CorsLayer::permissive())
        .layer(CatchPanicLayer::new())
        .fallback(|| async { (StatusCode::NOT_FOUND, "not found") })
        .with_state(app_state)
}
