use gymbook::api::routes::create_routes;
use gymbook::config::{AppConfig, DatabaseConfig};
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let config = AppConfig::from_env()?;
    let db_config = DatabaseConfig::from_env()?;

    let db = db_config.connect().await?;
    db_config.ensure_indexes(&db).await?;

    let app = create_routes(db, &config.jwt_secret);

    let address = config.server_address();
    let listener = TcpListener::bind(&address).await?;
    info!("gymbook server starting on http://{}", address);
    info!("Health check available at http://{}/health", address);

    axum::serve(listener, app).await?;

    Ok(())
}
