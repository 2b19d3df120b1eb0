use async_trait::async_trait;

use business::domain::cart::gateway::CartGateway;
use business::domain::cart::model::RemoteCartRecord;
use business::domain::errors::GatewayError;
use business::domain::shared::value_objects::ShopperId;

use crate::client::FakeStoreClient;
use crate::dto::RemoteCartDto;

pub struct CartGatewayHttp {
    client: FakeStoreClient,
}

impl CartGatewayHttp {
    pub fn new(client: FakeStoreClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CartGateway for CartGatewayHttp {
    /// The upstream keeps a history of carts per user; the newest record by
    /// date (ties broken by id) is the current one. A 404 or an empty list
    /// means the shopper has no cart yet.
    async fn fetch_current(
        &self,
        shopper_id: ShopperId,
    ) -> Result<Option<RemoteCartRecord>, GatewayError> {
        let response = self
            .client
            .client
            .get(self.client.user_carts_url(shopper_id))
            .send()
            .await
            .map_err(|_| GatewayError::Network)?;

        if response.status().as_u16() == 404 {
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(GatewayError::Status(response.status().as_u16()));
        }

        let records = response
            .json::<Vec<RemoteCartDto>>()
            .await
            .map_err(|_| GatewayError::MalformedPayload)?;

        Ok(records
            .into_iter()
            .map(RemoteCartDto::into_domain)
            .max_by_key(|record| (record.date, record.id)))
    }

    async fn push(&self, record: &RemoteCartRecord) -> Result<(), GatewayError> {
        let body = RemoteCartDto::from_domain(record);
        let response = self
            .client
            .client
            .post(self.client.carts_url())
            .json(&body)
            .send()
            .await
            .map_err(|_| GatewayError::Network)?;

        if !response.status().is_success() {
            return Err(GatewayError::Status(response.status().as_u16()));
        }

        // The mock API acknowledges writes without retaining them; the
        // response body carries no information the caller needs.
        Ok(())
    }
}
