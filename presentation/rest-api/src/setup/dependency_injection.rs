use std::sync::Arc;

use logger::TracingLogger;

use fakestore::cart_gateway::CartGatewayHttp;
use fakestore::client::FakeStoreClient;
use fakestore::fixture::{CartGatewayFixture, ProductGatewayFixture};
use fakestore::product_gateway::ProductGatewayHttp;

use business::application::cart::add_item::AddItemToCartUseCaseImpl;
use business::application::cart::clear_cart::ClearCartUseCaseImpl;
use business::application::cart::get_cart::GetCartUseCaseImpl;
use business::application::cart::hydrate::HydrateCartUseCaseImpl;
use business::application::cart::remove_item::RemoveItemFromCartUseCaseImpl;
use business::application::cart::sessions::CartSessions;
use business::application::cart::update_quantity::UpdateQuantityUseCaseImpl;
use business::application::catalog::cache::CatalogCache;
use business::application::catalog::get_all::GetAllProductsUseCaseImpl;
use business::application::catalog::get_by_category::GetProductsByCategoryUseCaseImpl;
use business::application::catalog::get_by_id::GetProductByIdUseCaseImpl;
use business::application::catalog::get_categories::GetCategoriesUseCaseImpl;
use business::domain::cart::gateway::CartGateway;
use business::domain::product::gateway::ProductGateway;

use crate::config::shop_api_config::{ShopApiConfig, ShopApiMode};

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub product_api: crate::api::product::routes::ProductApi,
    pub cart_api: crate::api::cart::routes::CartApi,
}

impl DependencyContainer {
    pub fn new() -> Self {
        let logger = Arc::new(TracingLogger);
        let health_api = crate::api::health::routes::Api::new();

        // Infrastructure adapters
        let shop_config = ShopApiConfig::from_env();
        let (product_gateway, cart_gateway): (Arc<dyn ProductGateway>, Arc<dyn CartGateway>) =
            match shop_config.mode {
                ShopApiMode::Http => {
                    let product_client = FakeStoreClient::new(shop_config.base_url.clone());
                    let cart_client = FakeStoreClient::new(shop_config.base_url);
                    (
                        Arc::new(ProductGatewayHttp::new(product_client)),
                        Arc::new(CartGatewayHttp::new(cart_client)),
                    )
                }
                ShopApiMode::Fixture => (
                    Arc::new(ProductGatewayFixture::new(
                        shop_config.fixture_dir.join("products.json"),
                    )),
                    Arc::new(CartGatewayFixture::new(
                        shop_config.fixture_dir.join("carts.json"),
                    )),
                ),
            };

        // Shared catalog cache and per-shopper cart sessions
        let catalog = Arc::new(CatalogCache::new(product_gateway, logger.clone()));
        let sessions = Arc::new(CartSessions::new(
            cart_gateway,
            catalog.clone(),
            logger.clone(),
        ));

        // Catalog use cases
        let get_all_products_use_case = Arc::new(GetAllProductsUseCaseImpl {
            catalog: catalog.clone(),
            logger: logger.clone(),
        });
        let get_product_by_id_use_case = Arc::new(GetProductByIdUseCaseImpl {
            catalog: catalog.clone(),
            logger: logger.clone(),
        });
        let get_by_category_use_case = Arc::new(GetProductsByCategoryUseCaseImpl {
            catalog: catalog.clone(),
            logger: logger.clone(),
        });
        let get_categories_use_case = Arc::new(GetCategoriesUseCaseImpl {
            catalog,
            logger: logger.clone(),
        });

        // Cart use cases
        let hydrate_use_case = Arc::new(HydrateCartUseCaseImpl {
            sessions: sessions.clone(),
            logger: logger.clone(),
        });
        let get_cart_use_case = Arc::new(GetCartUseCaseImpl {
            sessions: sessions.clone(),
            logger: logger.clone(),
        });
        let add_item_use_case = Arc::new(AddItemToCartUseCaseImpl {
            sessions: sessions.clone(),
            logger: logger.clone(),
        });
        let remove_item_use_case = Arc::new(RemoveItemFromCartUseCaseImpl {
            sessions: sessions.clone(),
            logger: logger.clone(),
        });
        let update_quantity_use_case = Arc::new(UpdateQuantityUseCaseImpl {
            sessions: sessions.clone(),
            logger: logger.clone(),
        });
        let clear_cart_use_case = Arc::new(ClearCartUseCaseImpl { sessions, logger });

        let product_api = crate::api::product::routes::ProductApi::new(
            get_all_products_use_case,
            get_product_by_id_use_case,
            get_by_category_use_case,
            get_categories_use_case,
        );

        let cart_api = crate::api::cart::routes::CartApi::new(
            hydrate_use_case,
            get_cart_use_case,
            add_item_use_case,
            remove_item_use_case,
            update_quantity_use_case,
            clear_cart_use_case,
        );

        Self {
            health_api,
            product_api,
            cart_api,
        }
    }
}
