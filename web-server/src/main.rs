use anyhow::Context;
use tracing::info;

use campass::database::DatabaseManager;
use campass::seed;
use campass_web_server::{create_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(std::env::var("RUST_LOG").unwrap_or_else(|_| {
            "campass=info,campass_web_server=info,tower_http=info".to_string()
        }))
        .init();

    // Load environment variables
    dotenvy::dotenv().ok();

    // Database connection and schema
    let db = DatabaseManager::with_default_config()
        .await
        .context("Failed to connect to database")?;
    db.run_migrations()
        .await
        .context("Failed to run migrations")?;

    let categories = db.category_repository();
    let locations = db.location_repository();

    // Seed before accepting requests; a seed failure is fatal to startup
    seed::load_sample_data(&categories, &locations)
        .await
        .context("Failed to seed sample data")?;

    let app_state = AppState {
        categories,
        locations,
    };
    let app = create_router(app_state);

    // Determine port
    let port = std::env::var("PORT")
        .ok()
        .and_then(|s| s.parse::<u16>().ok())
        .unwrap_or(3000);

    let addr = format!("0.0.0.0:{}", port);
    info!("Starting server on {}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app).await?;

    Ok(())
}
