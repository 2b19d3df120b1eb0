use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{PoisonError, RwLock};

use crate::domain::product::model::Product;

use super::model::{Cart, CartItem};

/// Authoritative local cart state for one shopper session.
///
/// Every mutation replaces the state under a single write lock, so readers
/// never observe a partially applied change. The revision counter increments
/// once per mutation and acts as a generation token: an in-flight remote push
/// is only "current" while the revision it captured is still the latest.
pub struct CartStore {
    state: RwLock<Cart>,
    revision: AtomicU64,
}

impl CartStore {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(Cart::new()),
            revision: AtomicU64::new(0),
        }
    }

    /// Runs a mutation and returns the new revision. The bump happens while
    /// the write lock is held, so a revision is never visible before its
    /// state.
    fn mutate(&self, apply: impl FnOnce(&mut Cart)) -> u64 {
        let mut cart = self.state.write().unwrap_or_else(PoisonError::into_inner);
        apply(&mut cart);
        self.revision.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn add_item(&self, product: Product, quantity: u32) -> u64 {
        self.mutate(|cart| cart.add_item(product, quantity))
    }

    pub fn remove_item(&self, product_id: u64) -> u64 {
        self.mutate(|cart| cart.remove_item(product_id))
    }

    pub fn update_quantity(&self, product_id: u64, quantity: u32) -> u64 {
        self.mutate(|cart| cart.update_quantity(product_id, quantity))
    }

    pub fn set_items(&self, items: Vec<CartItem>) -> u64 {
        self.mutate(|cart| cart.set_items(items))
    }

    pub fn clear(&self) -> u64 {
        self.mutate(|cart| cart.clear())
    }

    pub fn snapshot(&self) -> Cart {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn revision(&self) -> u64 {
        self.revision.load(Ordering::SeqCst)
    }
}

impl Default for CartStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: u64, price: f64) -> Product {
        Product::from_gateway(
            id,
            format!("Product {}", id),
            price,
            String::new(),
            "jewelery".to_string(),
            String::new(),
            None,
        )
    }

    #[test]
    fn should_increment_revision_on_every_mutation() {
        let store = CartStore::new();
        assert_eq!(store.revision(), 0);

        let first = store.add_item(product(1, 10.0), 2);
        let second = store.update_quantity(1, 4);
        let third = store.clear();

        assert_eq!(first, 1);
        assert_eq!(second, 2);
        assert_eq!(third, 3);
        assert_eq!(store.revision(), 3);
    }

    #[test]
    fn should_expose_mutations_through_snapshot() {
        let store = CartStore::new();
        store.add_item(product(1, 10.0), 2);
        store.add_item(product(2, 5.0), 1);
        store.remove_item(2);

        let cart = store.snapshot();

        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.items()[0].product.id, 1);
        assert_eq!(cart.total(), 20.0);
    }

    #[test]
    fn should_replace_state_atomically_on_set_items() {
        let store = CartStore::new();
        store.add_item(product(1, 10.0), 2);

        store.set_items(vec![CartItem {
            product: product(9, 1.5),
            quantity: 3,
        }]);

        let cart = store.snapshot();
        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.items()[0].product.id, 9);
    }
}
