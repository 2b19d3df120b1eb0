use reqwest::Client;

use business::domain::shared::value_objects::ShopperId;

pub const DEFAULT_BASE_URL: &str = "https://fakestoreapi.com";

/// Shared FakeStore HTTP client configuration.
pub struct FakeStoreClient {
    pub client: Client,
    pub base_url: String,
}

impl FakeStoreClient {
    pub fn new(base_url: String) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .unwrap_or_default();

        Self { client, base_url }
    }

    /// Returns the product listing endpoint URL.
    pub fn products_url(&self) -> String {
        format!("{}/products", self.base_url)
    }

    /// Returns the cart creation endpoint URL.
    pub fn carts_url(&self) -> String {
        format!("{}/carts", self.base_url)
    }

    /// Returns the per-user cart listing endpoint URL.
    pub fn user_carts_url(&self, shopper_id: ShopperId) -> String {
        format!("{}/carts/user/{}", self.base_url, shopper_id.value())
    }
}

impl Default for FakeStoreClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_build_endpoint_urls() {
        let client = FakeStoreClient::new("http://localhost:9000".to_string());

        assert_eq!(client.products_url(), "http://localhost:9000/products");
        assert_eq!(client.carts_url(), "http://localhost:9000/carts");
        assert_eq!(
            client.user_carts_url(ShopperId::new(4)),
            "http://localhost:9000/carts/user/4"
        );
    }
}
