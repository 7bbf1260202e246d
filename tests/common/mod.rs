//! Common test utilities
//!
//! Helpers shared by the integration suites: spinning up a server on an
//! ephemeral port and connecting to the optional test database.

#![allow(dead_code)]

use collab_notes::backend::routes::router::create_router;
use collab_notes::backend::server::state::AppState;

/// Serve the application on an ephemeral port, returning its base URL.
pub async fn spawn_server(state: AppState) -> String {
    let app = create_router(state);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            eprintln!("test server stopped: {}", e);
        }
    });

    format!("http://{}", addr)
}

/// Connect to the test database named by `DATABASE_URL`, running
/// migrations. Returns `None` when the variable is unset or the database
/// is unreachable, so DB-backed tests can skip themselves.
pub async fn db_pool() -> Option<sqlx::PgPool> {
    let url = std::env::var("DATABASE_URL").ok()?;
    let pool = sqlx::PgPool::connect(&url).await.ok()?;
    sqlx::migrate!().run(&pool).await.ok()?;
    Some(pool)
}
