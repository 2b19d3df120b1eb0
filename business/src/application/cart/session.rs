use std::sync::{Arc, Mutex, PoisonError};

use crate::domain::cart::gateway::CartGateway;
use crate::domain::cart::model::{CartItem, CartView, RemoteCartRecord};
use crate::domain::cart::store::CartStore;
use crate::domain::logger::Logger;
use crate::domain::product::catalog::ProductCatalog;
use crate::domain::shared::value_objects::ShopperId;

/// One shopper's cart session: the local store plus its remote sync client.
///
/// The store is the authoritative state. Mutations apply synchronously and
/// then issue a detached best-effort push of the full state to the remote
/// boundary. A push outcome is only applied while the store revision captured
/// at push time is still current; superseded outcomes are dropped, so the
/// local state is never overwritten by a stale remote response.
pub struct CartSession {
    shopper_id: ShopperId,
    store: CartStore,
    gateway: Arc<dyn CartGateway>,
    catalog: Arc<dyn ProductCatalog>,
    logger: Arc<dyn Logger>,
    sync_error: Mutex<Option<String>>,
}

impl CartSession {
    pub fn new(
        shopper_id: ShopperId,
        gateway: Arc<dyn CartGateway>,
        catalog: Arc<dyn ProductCatalog>,
        logger: Arc<dyn Logger>,
    ) -> Self {
        Self {
            shopper_id,
            store: CartStore::new(),
            gateway,
            catalog,
            logger,
            sync_error: Mutex::new(None),
        }
    }

    pub fn shopper_id(&self) -> ShopperId {
        self.shopper_id
    }

    pub fn view(&self) -> CartView {
        let cart = self.store.snapshot();
        CartView {
            total: cart.total(),
            item_count: cart.item_count(),
            items: cart.into_items(),
            sync_error: self.sync_error(),
        }
    }

    pub fn sync_error(&self) -> Option<String> {
        self.sync_error
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn set_sync_error(&self, message: String) {
        *self
            .sync_error
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = Some(message);
    }

    fn clear_sync_error(&self) {
        *self
            .sync_error
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = None;
    }

    /// Fetches the shopper's remote cart and replaces the local state with
    /// it. Product references the catalog cannot resolve are dropped, record
    /// order is preserved. A missing remote cart leaves the local state as it
    /// is; a remote failure additionally raises the sync error.
    pub async fn hydrate(&self) -> CartView {
        match self.gateway.fetch_current(self.shopper_id).await {
            Ok(Some(record)) => {
                let mut items = Vec::with_capacity(record.lines.len());
                for line in &record.lines {
                    match self.catalog.get_by_id(line.product_id).await {
                        Some(product) => items.push(CartItem {
                            product,
                            quantity: line.quantity.max(1),
                        }),
                        None => self.logger.debug(&format!(
                            "Dropping unresolvable product {} from remote cart",
                            line.product_id
                        )),
                    }
                }
                self.store.set_items(items);
                self.clear_sync_error();
                self.logger
                    .info(&format!("Cart hydrated for shopper {}", self.shopper_id));
            }
            Ok(None) => {
                self.logger.debug(&format!(
                    "No remote cart for shopper {}, keeping local state",
                    self.shopper_id
                ));
            }
            Err(err) => {
                self.set_sync_error(err.to_string());
                self.logger.warn(&format!(
                    "Cart hydration failed for shopper {}: {}",
                    self.shopper_id, err
                ));
            }
        }
        self.view()
    }

    pub async fn add_item(
        self: &Arc<Self>,
        product_id: u64,
        quantity: u32,
    ) -> Result<CartView, crate::domain::cart::errors::CartError> {
        let product = self
            .catalog
            .get_by_id(product_id)
            .await
            .ok_or(crate::domain::cart::errors::CartError::ProductNotFound)?;

        let revision = self.store.add_item(product, quantity);
        self.push_detached(revision);
        Ok(self.view())
    }

    pub fn remove_item(self: &Arc<Self>, product_id: u64) -> CartView {
        let revision = self.store.remove_item(product_id);
        self.push_detached(revision);
        self.view()
    }

    pub fn update_quantity(self: &Arc<Self>, product_id: u64, quantity: u32) -> CartView {
        let revision = self.store.update_quantity(product_id, quantity);
        self.push_detached(revision);
        self.view()
    }

    pub fn clear(self: &Arc<Self>) -> CartView {
        let revision = self.store.clear();
        self.push_detached(revision);
        self.view()
    }

    /// Spawns a fire-and-forget push of the current state. The UI path never
    /// waits on it.
    fn push_detached(self: &Arc<Self>, revision: u64) {
        let session = Arc::clone(self);
        tokio::spawn(async move {
            session.push_revision(revision).await;
        });
    }

    /// Pushes the current state on behalf of `revision`. The outcome (error
    /// flag set or cleared) is applied only while that revision is still the
    /// latest; otherwise a newer mutation owns the sync state.
    async fn push_revision(&self, revision: u64) {
        let record = RemoteCartRecord::from_cart(self.shopper_id, &self.store.snapshot());
        let result = self.gateway.push(&record).await;

        if self.store.revision() != revision {
            self.logger.debug(&format!(
                "Ignoring superseded cart push for shopper {}",
                self.shopper_id
            ));
            return;
        }

        match result {
            Ok(()) => {
                self.clear_sync_error();
                self.logger
                    .debug(&format!("Cart pushed for shopper {}", self.shopper_id));
            }
            Err(err) => {
                self.set_sync_error(err.to_string());
                self.logger.warn(&format!(
                    "Cart push failed for shopper {}: {}",
                    self.shopper_id, err
                ));
            }
        }
    }
}
