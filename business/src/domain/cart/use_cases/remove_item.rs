use async_trait::async_trait;

use crate::domain::cart::model::CartView;
use crate::domain::shared::value_objects::ShopperId;

pub struct RemoveItemParams {
    pub shopper_id: ShopperId,
    pub product_id: u64,
}

#[async_trait]
pub trait RemoveItemFromCartUseCase: Send + Sync {
    async fn execute(&self, params: RemoveItemParams) -> CartView;
}
