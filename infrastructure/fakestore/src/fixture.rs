use std::path::PathBuf;

use async_trait::async_trait;

use business::domain::cart::gateway::CartGateway;
use business::domain::cart::model::RemoteCartRecord;
use business::domain::errors::GatewayError;
use business::domain::product::gateway::ProductGateway;
use business::domain::product::model::Product;
use business::domain::shared::value_objects::ShopperId;

use crate::dto::{ProductDto, RemoteCartDto};

fn read_json<T: serde::de::DeserializeOwned>(path: &PathBuf) -> Result<T, GatewayError> {
    let raw = std::fs::read_to_string(path).map_err(|_| GatewayError::Network)?;
    serde_json::from_str(&raw).map_err(|_| GatewayError::MalformedPayload)
}

/// Product gateway backed by a local JSON fixture (an array of product
/// payloads in the upstream wire shape). Drop-in for offline development.
pub struct ProductGatewayFixture {
    path: PathBuf,
}

impl ProductGatewayFixture {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

#[async_trait]
impl ProductGateway for ProductGatewayFixture {
    async fn fetch_all(&self) -> Result<Vec<Product>, GatewayError> {
        let products: Vec<ProductDto> = read_json(&self.path)?;
        Ok(products.into_iter().map(ProductDto::into_domain).collect())
    }
}

/// Cart gateway backed by a local JSON fixture (an array of cart records).
/// Pushes are accepted and discarded; the boundary contract tolerates
/// non-persistence.
pub struct CartGatewayFixture {
    path: PathBuf,
}

impl CartGatewayFixture {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

#[async_trait]
impl CartGateway for CartGatewayFixture {
    async fn fetch_current(
        &self,
        shopper_id: ShopperId,
    ) -> Result<Option<RemoteCartRecord>, GatewayError> {
        let records: Vec<RemoteCartDto> = read_json(&self.path)?;
        Ok(records
            .into_iter()
            .map(RemoteCartDto::into_domain)
            .filter(|record| record.shopper_id == shopper_id)
            .max_by_key(|record| (record.date, record.id)))
    }

    async fn push(&self, _record: &RemoteCartRecord) -> Result<(), GatewayError> {
        Ok(())
    }
}
