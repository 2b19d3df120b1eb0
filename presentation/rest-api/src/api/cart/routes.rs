use std::sync::Arc;

use poem_openapi::{OpenApi, param::Header, param::Path, payload::Json};

use business::domain::cart::use_cases::add_item::{AddItemParams, AddItemToCartUseCase};
use business::domain::cart::use_cases::clear_cart::{ClearCartParams, ClearCartUseCase};
use business::domain::cart::use_cases::get_cart::{GetCartParams, GetCartUseCase};
use business::domain::cart::use_cases::hydrate::{HydrateCartParams, HydrateCartUseCase};
use business::domain::cart::use_cases::remove_item::{RemoveItemParams, RemoveItemFromCartUseCase};
use business::domain::cart::use_cases::update_quantity::{
    UpdateQuantityParams, UpdateQuantityUseCase,
};

use crate::api::cart::dto::{AddItemRequest, CartResponse, UpdateQuantityRequest};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::security::resolve_shopper;
use crate::api::tags::ApiTags;

pub struct CartApi {
    hydrate_use_case: Arc<dyn HydrateCartUseCase>,
    get_cart_use_case: Arc<dyn GetCartUseCase>,
    add_item_use_case: Arc<dyn AddItemToCartUseCase>,
    remove_item_use_case: Arc<dyn RemoveItemFromCartUseCase>,
    update_quantity_use_case: Arc<dyn UpdateQuantityUseCase>,
    clear_cart_use_case: Arc<dyn ClearCartUseCase>,
}

impl CartApi {
    pub fn new(
        hydrate_use_case: Arc<dyn HydrateCartUseCase>,
        get_cart_use_case: Arc<dyn GetCartUseCase>,
        add_item_use_case: Arc<dyn AddItemToCartUseCase>,
        remove_item_use_case: Arc<dyn RemoveItemFromCartUseCase>,
        update_quantity_use_case: Arc<dyn UpdateQuantityUseCase>,
        clear_cart_use_case: Arc<dyn ClearCartUseCase>,
    ) -> Self {
        Self {
            hydrate_use_case,
            get_cart_use_case,
            add_item_use_case,
            remove_item_use_case,
            update_quantity_use_case,
            clear_cart_use_case,
        }
    }
}

/// Cart session API
///
/// Each shopper session, identified by the `X-Session-Id` header, owns an
/// independent cart. Requests without the header act on the guest cart.
#[OpenApi]
impl CartApi {
    /// Get the current cart
    #[oai(path = "/cart", method = "get", tag = "ApiTags::Cart")]
    async fn get_cart(
        &self,
        #[oai(name = "X-Session-Id")] session_id: Header<Option<String>>,
    ) -> GetCartResponse {
        let shopper_id = resolve_shopper(session_id.0.as_deref());

        let view = self
            .get_cart_use_case
            .execute(GetCartParams { shopper_id })
            .await;
        GetCartResponse::Ok(Json(view.into()))
    }

    /// Hydrate the cart from the remote store
    ///
    /// Replaces local cart state with the shopper's most recent remote cart,
    /// when one exists. A remote failure leaves the local cart untouched and
    /// is reported through the `sync_error` field.
    #[oai(path = "/cart/hydrate", method = "post", tag = "ApiTags::Cart")]
    async fn hydrate(
        &self,
        #[oai(name = "X-Session-Id")] session_id: Header<Option<String>>,
    ) -> GetCartResponse {
        let shopper_id = resolve_shopper(session_id.0.as_deref());

        let view = self
            .hydrate_use_case
            .execute(HydrateCartParams { shopper_id })
            .await;
        GetCartResponse::Ok(Json(view.into()))
    }

    /// Add a product to the cart
    ///
    /// Adding a product already in the cart increments its quantity.
    #[oai(path = "/cart/items", method = "post", tag = "ApiTags::Cart")]
    async fn add_item(
        &self,
        #[oai(name = "X-Session-Id")] session_id: Header<Option<String>>,
        body: Json<AddItemRequest>,
    ) -> AddItemResponse {
        let shopper_id = resolve_shopper(session_id.0.as_deref());

        let params = AddItemParams {
            shopper_id,
            product_id: body.0.product_id,
            quantity: body.0.quantity.unwrap_or(1),
        };

        match self.add_item_use_case.execute(params).await {
            Ok(view) => AddItemResponse::Ok(Json(view.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => AddItemResponse::NotFound(json),
                    _ => AddItemResponse::BadGateway(json),
                }
            }
        }
    }

    /// Set the quantity of a cart line
    ///
    /// Zero or a negative quantity removes the line. Unknown product ids are
    /// ignored and the unchanged cart is returned.
    #[oai(
        path = "/cart/items/:product_id",
        method = "put",
        tag = "ApiTags::Cart"
    )]
    async fn update_quantity(
        &self,
        #[oai(name = "X-Session-Id")] session_id: Header<Option<String>>,
        product_id: Path<u64>,
        body: Json<UpdateQuantityRequest>,
    ) -> GetCartResponse {
        let shopper_id = resolve_shopper(session_id.0.as_deref());

        let params = UpdateQuantityParams {
            shopper_id,
            product_id: product_id.0,
            quantity: body.0.quantity,
        };

        let view = self.update_quantity_use_case.execute(params).await;
        GetCartResponse::Ok(Json(view.into()))
    }

    /// Remove a product from the cart
    ///
    /// Removing a product that is not in the cart is a no-op.
    #[oai(
        path = "/cart/items/:product_id",
        method = "delete",
        tag = "ApiTags::Cart"
    )]
    async fn remove_item(
        &self,
        #[oai(name = "X-Session-Id")] session_id: Header<Option<String>>,
        product_id: Path<u64>,
    ) -> GetCartResponse {
        let shopper_id = resolve_shopper(session_id.0.as_deref());

        let params = RemoveItemParams {
            shopper_id,
            product_id: product_id.0,
        };

        let view = self.remove_item_use_case.execute(params).await;
        GetCartResponse::Ok(Json(view.into()))
    }

    /// Empty the cart
    #[oai(path = "/cart", method = "delete", tag = "ApiTags::Cart")]
    async fn clear(
        &self,
        #[oai(name = "X-Session-Id")] session_id: Header<Option<String>>,
    ) -> GetCartResponse {
        let shopper_id = resolve_shopper(session_id.0.as_deref());

        let view = self
            .clear_cart_use_case
            .execute(ClearCartParams { shopper_id })
            .await;
        GetCartResponse::Ok(Json(view.into()))
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetCartResponse {
    #[oai(status = 200)]
    Ok(Json<CartResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum AddItemResponse {
    #[oai(status = 200)]
    Ok(Json<CartResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 502)]
    BadGateway(Json<ErrorResponse>),
}
