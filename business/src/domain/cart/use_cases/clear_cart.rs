use async_trait::async_trait;

use crate::domain::cart::model::CartView;
use crate::domain::shared::value_objects::ShopperId;

pub struct ClearCartParams {
    pub shopper_id: ShopperId,
}

#[async_trait]
pub trait ClearCartUseCase: Send + Sync {
    async fn execute(&self, params: ClearCartParams) -> CartView;
}
