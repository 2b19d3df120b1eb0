use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::model::CartView;
use crate::domain::cart::use_cases::get_cart::{GetCartParams, GetCartUseCase};
use crate::domain::logger::Logger;

use super::sessions::CartSessions;

pub struct GetCartUseCaseImpl {
    pub sessions: Arc<CartSessions>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetCartUseCase for GetCartUseCaseImpl {
    async fn execute(&self, params: GetCartParams) -> CartView {
        self.logger
            .debug(&format!("Reading cart for shopper {}", params.shopper_id));

        self.sessions.session(params.shopper_id).view()
    }
}
