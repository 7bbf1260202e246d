/**
 * Server Configuration
 *
 * Loads the optional PostgreSQL connection from the environment.
 *
 * # Error Handling
 *
 * Configuration errors are logged but do not prevent server startup.
 * Without a database the server still serves the subscription pipeline;
 * storage-backed handlers answer 503.
 */
use sqlx::PgPool;

/// Database configuration result.
pub type DatabaseConfig = Option<PgPool>;

/// Load and initialize the database connection pool.
///
/// Reads `DATABASE_URL`, connects, and applies migrations.
///
/// # Returns
///
/// - `Some(PgPool)` when the database is configured and reachable
/// - `None` when `DATABASE_URL` is unset or the connection fails
pub async fn load_database() -> DatabaseConfig {
    let database_url = match std::env::var("DATABASE_URL") {
        Ok(url) => url,
        Err(_) => {
            tracing::warn!("DATABASE_URL not set, storage-backed routes will answer 503");
            return None;
        }
    };

    tracing::info!("connecting to database");

    let pool = match PgPool::connect(&database_url).await {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!("failed to create database connection pool: {:?}", e);
            return None;
        }
    };

    tracing::info!("running database migrations");
    match sqlx::migrate!().run(&pool).await {
        Ok(_) => tracing::info!("database migrations completed"),
        Err(e) => {
            // Migrations may already be applied by another process.
            tracing::error!("failed to run database migrations: {:?}", e);
        }
    }

    Some(pool)
}
