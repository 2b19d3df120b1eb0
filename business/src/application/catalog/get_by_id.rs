use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::catalog::ProductCatalog;
use crate::domain::product::errors::CatalogError;
use crate::domain::product::model::Product;
use crate::domain::product::use_cases::get_by_id::{GetProductByIdParams, GetProductByIdUseCase};

pub struct GetProductByIdUseCaseImpl {
    pub catalog: Arc<dyn ProductCatalog>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetProductByIdUseCase for GetProductByIdUseCaseImpl {
    async fn execute(&self, params: GetProductByIdParams) -> Result<Product, CatalogError> {
        self.logger
            .debug(&format!("Resolving product {}", params.id));

        self.catalog
            .get_by_id(params.id)
            .await
            .ok_or(CatalogError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use mockall::mock;

    use super::*;

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
    async fn should_return_product_when_present() {
        let mut catalog = MockCatalog::new();
        catalog.expect_get_by_id().returning(|id| {
            Some(Product::from_gateway(
                id,
                "SSD Drive".to_string(),
                109.0,
                String::new(),
                "electronics".to_string(),
                String::new(),
                None,
            ))
        });

        let use_case = GetProductByIdUseCaseImpl {
            catalog: Arc::new(catalog),
            logger: mock_logger(),
        };

        let product = use_case.execute(GetProductByIdParams { id: 9 }).await;

        assert_eq!(product.unwrap().id, 9);
    }

    #[tokio::test]
    async fn should_return_not_found_for_unknown_id() {
        let mut catalog = MockCatalog::new();
        catalog.expect_get_by_id().returning(|_| None);

        let use_case = GetProductByIdUseCaseImpl {
            catalog: Arc::new(catalog),
            logger: mock_logger(),
        };

        let result = use_case.execute(GetProductByIdParams { id: 404 }).await;

        assert!(matches!(result.unwrap_err(), CatalogError::NotFound));
    }
}
