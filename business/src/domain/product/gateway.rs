use async_trait::async_trait;

use crate::domain::errors::GatewayError;

use super::model::Product;

/// Port to the upstream product API. One full listing fetch is all the
/// catalog cache needs; by-id and by-category reads are served from memory.
#[async_trait]
pub trait ProductGateway: Send + Sync {
    async fn fetch_all(&self) -> Result<Vec<Product>, GatewayError>;
}
