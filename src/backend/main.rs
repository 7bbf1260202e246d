/**
 * Collab Notes Server Entry Point
 *
 * Initializes logging, assembles the application, and serves it.
 */

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file if present
    dotenv::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&env_filter))
        .init();

    let app = collab_notes::backend::server::init::create_app().await;

    let port = std::env::var("SERVER_PORT")
        .unwrap_or_else(|_| "4000".to_string())
        .parse::<u16>()
        .unwrap_or(4000);

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("query endpoint: http://localhost:{}/api", port);
    tracing::info!("subscription endpoint: http://localhost:{}/subscriptions/notes", port);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
