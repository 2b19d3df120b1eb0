#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("product.not_found")]
    NotFound,
    #[error("gateway.unavailable")]
    Gateway(#[from] crate::domain::errors::GatewayError),
}
