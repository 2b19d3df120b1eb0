use super::{cors_config, server_config::ServerConfig};
use poem::middleware::Cors;

/// Top-level configuration for the HTTP surface. The upstream shop API
/// gateway selection lives in `shop_api_config` and is resolved during
/// dependency wiring.
pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: Cors,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig::from_env(),
            cors: cors_config::init_cors(),
        }
    }
}
