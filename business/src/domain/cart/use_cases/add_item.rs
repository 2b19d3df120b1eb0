use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::CartView;
use crate::domain::shared::value_objects::ShopperId;

pub struct AddItemParams {
    pub shopper_id: ShopperId,
    pub product_id: u64,
    /// Zero is coerced to 1.
    pub quantity: u32,
}

#[async_trait]
pub trait AddItemToCartUseCase: Send + Sync {
    async fn execute(&self, params: AddItemParams) -> Result<CartView, CartError>;
}
