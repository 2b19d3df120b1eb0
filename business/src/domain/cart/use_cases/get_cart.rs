use async_trait::async_trait;

use crate::domain::cart::model::CartView;
use crate::domain::shared::value_objects::ShopperId;

pub struct GetCartParams {
    pub shopper_id: ShopperId,
}

#[async_trait]
pub trait GetCartUseCase: Send + Sync {
    async fn execute(&self, params: GetCartParams) -> CartView;
}
