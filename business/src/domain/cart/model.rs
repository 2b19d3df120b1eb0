use chrono::{DateTime, Utc};

use crate::domain::product::model::Product;
use crate::domain::shared::value_objects::ShopperId;

/// One cart line. Invariant: `quantity >= 1`; a quantity update to zero
/// removes the line instead of storing it.
#[derive(Debug, Clone, PartialEq)]
pub struct CartItem {
    pub product: Product,
    pub quantity: u32,
}

/// The ordered cart collection for one shopper session. At most one item per
/// distinct product id; insertion order is preserved.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Adds `quantity` units of `product`. An existing line for the same
    /// product id is incremented in place; otherwise a new line is appended.
    /// A requested quantity of zero is coerced to 1.
    pub fn add_item(&mut self, product: Product, quantity: u32) {
        let quantity = quantity.max(1);
        match self.items.iter_mut().find(|i| i.product.id == product.id) {
            Some(existing) => existing.quantity = existing.quantity.saturating_add(quantity),
            None => self.items.push(CartItem { product, quantity }),
        }
    }

    /// No-op when no line matches `product_id`.
    pub fn remove_item(&mut self, product_id: u64) {
        self.items.retain(|i| i.product.id != product_id);
    }

    /// Sets the quantity of the matching line. Zero removes the line; an
    /// absent product id is a no-op.
    pub fn update_quantity(&mut self, product_id: u64, quantity: u32) {
        if quantity == 0 {
            self.remove_item(product_id);
            return;
        }
        if let Some(item) = self.items.iter_mut().find(|i| i.product.id == product_id) {
            item.quantity = quantity;
        }
    }

    /// Replaces the whole collection (used on hydration). Duplicate product
    /// ids in the input are merged in order, re-establishing the uniqueness
    /// invariant.
    pub fn set_items(&mut self, items: Vec<CartItem>) {
        let mut replacement = Cart::new();
        for item in items {
            replacement.add_item(item.product, item.quantity);
        }
        *self = replacement;
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn into_items(self) -> Vec<CartItem> {
        self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Exact sum of price × quantity; rounding to currency precision is the
    /// display layer's concern.
    pub fn total(&self) -> f64 {
        self.items
            .iter()
            .map(|i| i.product.price * f64::from(i.quantity))
            .sum()
    }

    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity)).sum()
    }
}

/// One product reference in a remote cart record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLine {
    pub product_id: u64,
    pub quantity: u32,
}

/// Wire-shape cart as stored by the remote boundary: product references only,
/// joined against the catalog during hydration.
#[derive(Debug, Clone, PartialEq)]
pub struct RemoteCartRecord {
    /// Remote record id; `None` until the boundary assigns one.
    pub id: Option<u64>,
    pub shopper_id: ShopperId,
    pub date: DateTime<Utc>,
    pub lines: Vec<CartLine>,
}

impl RemoteCartRecord {
    pub fn from_cart(shopper_id: ShopperId, cart: &Cart) -> Self {
        Self {
            id: None,
            shopper_id,
            date: Utc::now(),
            lines: cart
                .items()
                .iter()
                .map(|i| CartLine {
                    product_id: i.product.id,
                    quantity: i.quantity,
                })
                .collect(),
        }
    }
}

/// Read projection handed to the UI layer: items, derived values and the
/// current non-blocking sync warning, if any.
#[derive(Debug, Clone)]
pub struct CartView {
    pub items: Vec<CartItem>,
    pub total: f64,
    pub item_count: u64,
    pub sync_error: Option<String>,
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn product(id: u64, price: f64) -> Product {
        Product::from_gateway(
            id,
            format!("Product {}", id),
            price,
            String::new(),
            "electronics".to_string(),
            String::new(),
            None,
        )
    }

    #[test]
    fn should_merge_repeated_adds_and_preserve_order() {
        let mut cart = Cart::new();
        cart.add_item(product(1, 10.0), 2);
        cart.add_item(product(2, 5.0), 1);
        cart.add_item(product(1, 10.0), 3);

        assert_eq!(cart.items().len(), 2);
        assert_eq!(cart.items()[0].product.id, 1);
        assert_eq!(cart.items()[0].quantity, 5);
        assert_eq!(cart.items()[1].product.id, 2);
        assert_eq!(cart.items()[1].quantity, 1);
        assert_eq!(cart.total(), 55.0);
        assert_eq!(cart.item_count(), 6);
    }

    #[test]
    fn should_remove_item_on_zero_quantity_update() {
        let mut cart = Cart::new();
        cart.add_item(product(1, 10.0), 5);
        cart.add_item(product(2, 5.0), 1);

        cart.update_quantity(2, 0);

        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.items()[0].product.id, 1);
        assert_eq!(cart.items()[0].quantity, 5);
    }

    #[test]
    fn should_coerce_zero_add_quantity_to_one() {
        let mut cart = Cart::new();
        cart.add_item(product(7, 3.5), 0);

        assert_eq!(cart.items()[0].quantity, 1);
    }

    #[test]
    fn should_ignore_update_for_absent_product() {
        let mut cart = Cart::new();
        cart.add_item(product(1, 10.0), 1);

        cart.update_quantity(99, 4);
        cart.remove_item(42);

        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.items()[0].quantity, 1);
    }

    #[test]
    fn should_fully_replace_on_set_items() {
        let mut cart = Cart::new();
        cart.add_item(product(1, 10.0), 2);

        cart.set_items(vec![
            CartItem {
                product: product(5, 2.0),
                quantity: 3,
            },
            CartItem {
                product: product(5, 2.0),
                quantity: 1,
            },
            CartItem {
                product: product(6, 4.0),
                quantity: 2,
            },
        ]);

        assert_eq!(cart.items().len(), 2);
        assert_eq!(cart.items()[0].product.id, 5);
        assert_eq!(cart.items()[0].quantity, 4);
        assert_eq!(cart.items()[1].product.id, 6);
    }

    #[test]
    fn should_clear_all_items() {
        let mut cart = Cart::new();
        cart.add_item(product(1, 10.0), 2);

        cart.clear();

        assert!(cart.is_empty());
        assert_eq!(cart.total(), 0.0);
        assert_eq!(cart.item_count(), 0);
    }

    #[test]
    fn should_capture_lines_in_remote_record() {
        let mut cart = Cart::new();
        cart.add_item(product(1, 10.0), 2);
        cart.add_item(product(2, 5.0), 1);

        let record = RemoteCartRecord::from_cart(ShopperId::new(4), &cart);

        assert_eq!(record.id, None);
        assert_eq!(record.shopper_id, ShopperId::new(4));
        assert_eq!(
            record.lines,
            vec![
                CartLine {
                    product_id: 1,
                    quantity: 2
                },
                CartLine {
                    product_id: 2,
                    quantity: 1
                },
            ]
        );
    }

    proptest! {
        #[test]
        fn add_sequences_keep_product_ids_unique(
            ops in proptest::collection::vec((1u64..20, 0u32..5), 0..40)
        ) {
            let mut cart = Cart::new();
            for (id, quantity) in ops {
                cart.add_item(product(id, 1.0), quantity);
            }

            let mut ids: Vec<u64> = cart.items().iter().map(|i| i.product.id).collect();
            let line_count = ids.len();
            ids.sort_unstable();
            ids.dedup();
            prop_assert_eq!(ids.len(), line_count);
            prop_assert!(cart.items().iter().all(|i| i.quantity >= 1));
        }

        #[test]
        fn zero_quantity_update_always_removes(
            ops in proptest::collection::vec((1u64..10, 1u32..5), 1..20),
            target in 1u64..10,
        ) {
            let mut cart = Cart::new();
            for (id, quantity) in ops {
                cart.add_item(product(id, 2.0), quantity);
            }

            cart.update_quantity(target, 0);

            prop_assert!(cart.items().iter().all(|i| i.product.id != target));
        }

        #[test]
        fn total_matches_sum_of_lines(
            ops in proptest::collection::vec((1u64..15, 1u32..9, 1u32..500), 0..30)
        ) {
            let mut cart = Cart::new();
            for (id, quantity, cents) in &ops {
                cart.add_item(product(*id, f64::from(*cents) / 100.0), *quantity);
            }

            let expected: f64 = cart
                .items()
                .iter()
                .map(|i| i.product.price * f64::from(i.quantity))
                .sum();
            prop_assert!((cart.total() - expected).abs() < 1e-9);

            let expected_count: u64 = cart.items().iter().map(|i| u64::from(i.quantity)).sum();
            prop_assert_eq!(cart.item_count(), expected_count);
        }
    }
}
