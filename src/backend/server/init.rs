/**
 * Server Initialization
 *
 * Assembles the application: state creation, database loading, and route
 * configuration.
 *
 * # Initialization Process
 *
 * 1. Load the optional database pool (connect + migrate)
 * 2. Create the application state, which constructs the fan-out hub
 * 3. Build the router with all routes and middleware
 *
 * There is no state restoration step: the fan-out hub is deliberately
 * empty at startup because the delivery model has no backlog or replay.
 */
use axum::Router;

use crate::backend::routes::router::create_router;
use crate::backend::server::config::load_database;
use crate::backend::server::state::AppState;

/// Create and configure the Axum application.
///
/// # Returns
///
/// Configured router ready to serve requests.
pub async fn create_app() -> Router<()> {
    tracing::info!("initializing collab-notes server");

    let db_pool = load_database().await;
    let app_state = AppState::new(db_pool);

    tracing::info!("application state and fan-out hub initialized");

    create_router(app_state)
}
