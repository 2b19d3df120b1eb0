use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::model::CartView;
use crate::domain::cart::use_cases::remove_item::{RemoveItemParams, RemoveItemFromCartUseCase};
use crate::domain::logger::Logger;

use super::sessions::CartSessions;

pub struct RemoveItemFromCartUseCaseImpl {
    pub sessions: Arc<CartSessions>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RemoveItemFromCartUseCase for RemoveItemFromCartUseCaseImpl {
    async fn execute(&self, params: RemoveItemParams) -> CartView {
        self.logger.info(&format!(
            "Removing product {} from cart for shopper {}",
            params.product_id, params.shopper_id
        ));

        self.sessions
            .session(params.shopper_id)
            .remove_item(params.product_id)
    }
}
