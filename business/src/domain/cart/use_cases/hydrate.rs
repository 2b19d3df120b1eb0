use async_trait::async_trait;

use crate::domain::cart::model::CartView;
use crate::domain::shared::value_objects::ShopperId;

pub struct HydrateCartParams {
    pub shopper_id: ShopperId,
}

/// Populates the local cart from the remote boundary at session start.
/// Remote failure is recoverable: the local state stands and the returned
/// view carries the sync error.
#[async_trait]
pub trait HydrateCartUseCase: Send + Sync {
    async fn execute(&self, params: HydrateCartParams) -> CartView;
}
