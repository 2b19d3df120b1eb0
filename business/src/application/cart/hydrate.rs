use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::model::CartView;
use crate::domain::cart::use_cases::hydrate::{HydrateCartParams, HydrateCartUseCase};
use crate::domain::logger::Logger;

use super::sessions::CartSessions;

pub struct HydrateCartUseCaseImpl {
    pub sessions: Arc<CartSessions>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl HydrateCartUseCase for HydrateCartUseCaseImpl {
    async fn execute(&self, params: HydrateCartParams) -> CartView {
        self.logger
            .info(&format!("Hydrating cart for shopper {}", params.shopper_id));

        self.sessions.session(params.shopper_id).hydrate().await
    }
}

#[cfg(test)]
mod tests {
    use mockall::mock;

    use crate::domain::cart::gateway::CartGateway;
    use crate::domain::cart::model::{CartLine, RemoteCartRecord};
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

    #[tokio::test]
    async fn should_hydrate_session_from_remote_record() {
        let mut gateway = MockGateway::new();
        gateway.expect_fetch_current().returning(|shopper_id| {
            Ok(Some(RemoteCartRecord {
                id: Some(1),
                shopper_id,
                date: chrono::Utc::now(),
                lines: vec![CartLine {
                    product_id: 2,
                    quantity: 3,
                }],
            }))
        });

        let mut catalog = MockCatalog::new();
        catalog.expect_get_by_id().returning(|id| {
            Some(Product::from_gateway(
                id,
                "Gold Ring".to_string(),
                120.0,
                String::new(),
                "jewelery".to_string(),
                String::new(),
                None,
            ))
        });

        let use_case = HydrateCartUseCaseImpl {
            sessions: Arc::new(CartSessions::new(
                Arc::new(gateway),
                Arc::new(catalog),
                mock_logger(),
            )),
            logger: mock_logger(),
        };

        let view = use_case
            .execute(HydrateCartParams {
                shopper_id: ShopperId::new(2),
            })
            .await;

        assert_eq!(view.items.len(), 1);
        assert_eq!(view.items[0].product.id, 2);
        assert_eq!(view.item_count, 3);
        assert_eq!(view.total, 360.0);
    }
}
