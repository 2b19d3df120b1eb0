use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::model::CartView;
use crate::domain::cart::use_cases::update_quantity::{
    UpdateQuantityParams, UpdateQuantityUseCase,
};
use crate::domain::logger::Logger;

use super::sessions::CartSessions;

pub struct UpdateQuantityUseCaseImpl {
    pub sessions: Arc<CartSessions>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateQuantityUseCase for UpdateQuantityUseCaseImpl {
    async fn execute(&self, params: UpdateQuantityParams) -> CartView {
        self.logger.info(&format!(
            "Updating product {} to quantity {} for shopper {}",
            params.product_id, params.quantity, params.shopper_id
        ));

        // Negative requests behave like zero: the item is removed.
        let quantity = u32::try_from(params.quantity.max(0)).unwrap_or(u32::MAX);
        self.sessions
            .session(params.shopper_id)
            .update_quantity(params.product_id, quantity)
    }
}
