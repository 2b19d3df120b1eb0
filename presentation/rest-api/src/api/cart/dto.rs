use poem_openapi::Object;

use business::domain::cart::model::{CartItem, CartView};

use crate::api::product::dto::ProductResponse;

#[derive(Debug, Clone, Object)]
pub struct CartItemResponse {
    /// The catalog product for this line
    pub product: ProductResponse,
    /// Units of the product in the cart, always at least 1
    pub quantity: u32,
}

impl From<CartItem> for CartItemResponse {
    fn from(item: CartItem) -> Self {
        Self {
            product: item.product.into(),
            quantity: item.quantity,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct CartResponse {
    /// Cart lines in insertion order
    pub items: Vec<CartItemResponse>,
    /// Sum of price times quantity over all lines
    pub total: f64,
    /// Total number of units across all lines
    pub item_count: u64,
    /// Last remote synchronization failure, cleared on success
    #[oai(skip_serializing_if_is_none)]
    pub sync_error: Option<String>,
}

impl From<CartView> for CartResponse {
    fn from(view: CartView) -> Self {
        Self {
            items: view.items.into_iter().map(|i| i.into()).collect(),
            total: view.total,
            item_count: view.item_count,
            sync_error: view.sync_error,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct AddItemRequest {
    /// Catalog id of the product to add
    pub product_id: u64,
    /// Units to add; omitted or zero means 1
    pub quantity: Option<u32>,
}

#[derive(Debug, Clone, Object)]
pub struct UpdateQuantityRequest {
    /// New absolute quantity; zero or negative removes the line
    pub quantity: i64,
}
