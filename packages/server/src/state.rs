use sea_orm::DatabaseConnection;

use crate::config::AppConfig;

/// Shared handles injected into every handler. Cloning is cheap: the
/// connection is a pool handle created once at startup.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub config: AppConfig,
}
