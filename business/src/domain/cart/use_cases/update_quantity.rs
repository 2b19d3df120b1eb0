use async_trait::async_trait;

use crate::domain::cart::model::CartView;
use crate::domain::shared::value_objects::ShopperId;

pub struct UpdateQuantityParams {
    pub shopper_id: ShopperId,
    pub product_id: u64,
    /// Zero or negative removes the item.
    pub quantity: i64,
}

#[async_trait]
pub trait UpdateQuantityUseCase: Send + Sync {
    async fn execute(&self, params: UpdateQuantityParams) -> CartView;
}
