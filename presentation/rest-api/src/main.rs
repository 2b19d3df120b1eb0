use dotenvy::dotenv;

mod api {
    pub mod error;
    pub mod security;
    pub mod tags;
    pub mod cart {
        pub mod dto;
        pub mod error_mapper;
        pub mod routes;
    }
    pub mod health {
        pub mod routes;
    }
    pub mod product {
        pub mod dto;
        pub mod error_mapper;
        pub mod routes;
    }
}
mod config {
    pub mod app_config;
    pub mod cors_config;
    pub mod server_config;
    pub mod shop_api_config;
}
mod setup {
    pub mod dependency_injection;
    pub mod server;
}

use config::app_config::AppConfig;
use setup::{dependency_injection::DependencyContainer, server::Server};

/// REST API Entry Point
///
/// Initializes the application, wires dependencies, and starts the HTTP server.
///
/// Hexagonal layout:
/// - config/: Application configuration (server, CORS, upstream shop API)
/// - setup/: Dependency injection and server setup
/// - api/: Route handlers and DTOs
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize tracing with RUST_LOG env filter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // 2. Load environment variables
    dotenv().ok();

    // 3. Load configuration
    let config = AppConfig::from_env();

    // 4. Wire dependencies
    let container = DependencyContainer::new();

    // 5. Run server
    Server::run(config, container).await?;

    Ok(())
}
