#[derive(Debug, thiserror::Error)]
pub enum CartError {
    #[error("cart.product_not_found")]
    ProductNotFound,
    #[error("gateway.unavailable")]
    Gateway(#[from] crate::domain::errors::GatewayError),
}
