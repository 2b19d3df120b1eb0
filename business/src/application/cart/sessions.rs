use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use crate::domain::cart::gateway::CartGateway;
use crate::domain::logger::Logger;
use crate::domain::product::catalog::ProductCatalog;
use crate::domain::shared::value_objects::ShopperId;

use super::session::CartSession;

/// Hands out one `CartSession` per shopper. Owned by the composition root
/// and passed down explicitly; sessions are created lazily and live for the
/// process lifetime.
pub struct CartSessions {
    gateway: Arc<dyn CartGateway>,
    catalog: Arc<dyn ProductCatalog>,
    logger: Arc<dyn Logger>,
    sessions: Mutex<HashMap<ShopperId, Arc<CartSession>>>,
}

impl CartSessions {
    pub fn new(
        gateway: Arc<dyn CartGateway>,
        catalog: Arc<dyn ProductCatalog>,
        logger: Arc<dyn Logger>,
    ) -> Self {
        Self {
            gateway,
            catalog,
            logger,
            sessions: Mutex::new(HashMap::new()),
        }
    }

    pub fn session(&self, shopper_id: ShopperId) -> Arc<CartSession> {
        let mut sessions = self
            .sessions
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        sessions
            .entry(shopper_id)
            .or_insert_with(|| {
                Arc::new(CartSession::new(
                    shopper_id,
                    self.gateway.clone(),
                    self.catalog.clone(),
                    self.logger.clone(),
                ))
            })
            .clone()
    }
}
