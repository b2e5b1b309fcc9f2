use tracing::{Level, info};

use ads_server::config::AppConfig;
use ads_server::database::init_db;
use ads_server::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    let config = AppConfig::load()?;
    let db = init_db(&config.database).await?;
    info!("Database ready");

    let listener =
        tokio::net::TcpListener::bind((config.server.host.as_str(), config.server.port)).await?;
    info!("Server running at http://{}", listener.local_addr()?);

    let app = ads_server::build_router(AppState { db, config });
    axum::serve(listener, app).await?;

    Ok(())
}
