use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::CartView;
use crate::domain::cart::use_cases::add_item::{AddItemParams, AddItemToCartUseCase};
use crate::domain::logger::Logger;

use super::sessions::CartSessions;

pub struct AddItemToCartUseCaseImpl {
    pub sessions: Arc<CartSessions>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AddItemToCartUseCase for AddItemToCartUseCaseImpl {
    async fn execute(&self, params: AddItemParams) -> Result<CartView, CartError> {
        self.logger.info(&format!(
            "Adding product {} (x{}) to cart for shopper {}",
            params.product_id, params.quantity, params.shopper_id
        ));

        let session = self.sessions.session(params.shopper_id);
        session.add_item(params.product_id, params.quantity).await
    }
}

#[cfg(test)]
mod tests {
    use mockall::mock;

    use crate::domain::cart::gateway::CartGateway;
    use crate::domain::cart::model::RemoteCartRecord;
    use crate::domain::errors::GatewayError;
    use crate::domain::product::catalog::ProductCatalog;
    use crate::domain::product::errors::CatalogError;
    use crate::domain::product::model::Product;
    use crate::domain::shared::value_objects::ShopperId;

    use super::*;

    mock! {
        pub Gateway {}

        #[async_trait]
        impl CartGateway for Gateway {
            async fn fetch_current(&self, shopper_id: ShopperId) -> Result<Option<RemoteCartRecord>, GatewayError>;
            async fn push(&self, record: &RemoteCartRecord) -> Result<(), GatewayError>;
        }
    }

    mock! {
        pub Catalog {}

        #[async_trait]
        impl ProductCatalog for Catalog {
            async fn load(&self) -> Result<(), CatalogError>;
            async fn get_all(&self) -> Result<Vec<Product>, CatalogError>;
            async fn get_by_id(&self, id: u64) -> Option<Product>;
            async fn get_by_category(&self, category: &str) -> Result<Vec<Product>, CatalogError>;
            async fn get_categories(&self) -> Result<Vec<String>, CatalogError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn use_case(gateway: MockGateway, catalog: MockCatalog) -> AddItemToCartUseCaseImpl {
        AddItemToCartUseCaseImpl {
            sessions: Arc::new(CartSessions::new(
                Arc::new(gateway),
                Arc::new(catalog),
                mock_logger(),
            )),
            logger: mock_logger(),
        }
    }

    #[tokio::test]
    async fn should_add_resolved_product_to_cart() {
        let mut gateway = MockGateway::new();
        gateway.expect_push().returning(|_| Ok(()));

        let mut catalog = MockCatalog::new();
        catalog.expect_get_by_id().returning(|id| {
            Some(Product::from_gateway(
                id,
                "Backpack".to_string(),
                109.95,
                String::new(),
                "men's clothing".to_string(),
                String::new(),
                None,
            ))
        });

        let use_case = use_case(gateway, catalog);

        let view = use_case
            .execute(AddItemParams {
                shopper_id: ShopperId::GUEST,
                product_id: 1,
                quantity: 2,
            })
            .await
            .unwrap();

        assert_eq!(view.items.len(), 1);
        assert_eq!(view.item_count, 2);
        assert_eq!(view.total, 219.9);
    }

    #[tokio::test]
    async fn should_fail_when_product_is_not_in_catalog() {
        let mut catalog = MockCatalog::new();
        catalog.expect_get_by_id().returning(|_| None);

        let use_case = use_case(MockGateway::new(), catalog);

        let result = use_case
            .execute(AddItemParams {
                shopper_id: ShopperId::GUEST,
                product_id: 404,
                quantity: 1,
            })
            .await;

        assert!(matches!(result.unwrap_err(), CartError::ProductNotFound));
    }
}
