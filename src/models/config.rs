use serde::Deserialize;

/// Configuration options for the category service.
///
/// Loaded from `config/default.yaml`, an optional `config/{APP_ENV}.yaml`
/// overlay and `APP_*` environment variables.
#[derive(Clone, Debug, Deserialize)]
pub struct ServerConfig {
    /// Interface the HTTP server binds to.
    pub address: String,
    /// Port the HTTP server listens on.
    pub port: u16,
    /// SQLite database file (or `:memory:`).
    pub database_url: String,
}
