use async_trait::async_trait;

use business::domain::errors::GatewayError;
use business::domain::product::gateway::ProductGateway;
use business::domain::product::model::Product;

use crate::client::FakeStoreClient;
use crate::dto::ProductDto;

pub struct ProductGatewayHttp {
    client: FakeStoreClient,
}

impl ProductGatewayHttp {
    pub fn new(client: FakeStoreClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ProductGateway for ProductGatewayHttp {
    async fn fetch_all(&self) -> Result<Vec<Product>, GatewayError> {
        let response = self
            .client
            .client
            .get(self.client.products_url())
            .send()
            .await
            .map_err(|_| GatewayError::Network)?;

        if !response.status().is_success() {
            return Err(GatewayError::Status(response.status().as_u16()));
        }

        let products = response
            .json::<Vec<ProductDto>>()
            .await
            .map_err(|_| GatewayError::MalformedPayload)?;

        Ok(products.into_iter().map(ProductDto::into_domain).collect())
    }
}
