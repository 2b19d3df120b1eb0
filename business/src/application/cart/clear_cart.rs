use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::model::CartView;
use crate::domain::cart::use_cases::clear_cart::{ClearCartParams, ClearCartUseCase};
use crate::domain::logger::Logger;

use super::sessions::CartSessions;

pub struct ClearCartUseCaseImpl {
    pub sessions: Arc<CartSessions>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ClearCartUseCase for ClearCartUseCaseImpl {
    async fn execute(&self, params: ClearCartParams) -> CartView {
        self.logger
            .info(&format!("Clearing cart for shopper {}", params.shopper_id));

        self.sessions.session(params.shopper_id).clear()
    }
}
