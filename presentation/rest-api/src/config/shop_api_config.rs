use std::env;
use std::path::PathBuf;

use fakestore::client::DEFAULT_BASE_URL;

/// Which product and cart gateways the service runs against.
#[derive(Debug, Clone, PartialEq)]
pub enum ShopApiMode {
    /// Live upstream shop API over HTTP
    Http,
    /// Local JSON fixture files, for offline development and demos
    Fixture,
}

/// Upstream shop API configuration.
pub struct ShopApiConfig {
    pub mode: ShopApiMode,
    pub base_url: String,
    pub fixture_dir: PathBuf,
}

impl ShopApiConfig {
    /// Load shop API configuration from environment variables
    ///
    /// Environment variables:
    /// - SHOP_API_MODE: "http" or "fixture" (default: "http")
    /// - SHOP_API_BASE_URL: Upstream base URL (default: the public FakeStore API)
    /// - SHOP_API_FIXTURE_DIR: Directory holding products.json and carts.json
    ///   (default: "fixtures", only used in fixture mode)
    pub fn from_env() -> Self {
        let mode = match env::var("SHOP_API_MODE").as_deref() {
            Ok("fixture") => ShopApiMode::Fixture,
            _ => ShopApiMode::Http,
        };
        let base_url =
            env::var("SHOP_API_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let fixture_dir = env::var("SHOP_API_FIXTURE_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("fixtures"));

        Self {
            mode,
            base_url,
            fixture_dir,
        }
    }
}
