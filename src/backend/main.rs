//! Pizzetta Server Entry Point
//!
//! Boots the storefront API: environment, tracing, database (with demo
//! seed on an empty catalog), then the axum listener.

use pizzetta::backend::server::{config, create_app, seed};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file if present
    dotenv::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&env_filter))
        .init();

    let cfg = config::Config::from_env();

    let db = config::load_database(&cfg.database_url).await?;
    seed::seed_if_empty(&db).await?;

    let app = create_app(db);

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], cfg.port));
    tracing::info!("listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
