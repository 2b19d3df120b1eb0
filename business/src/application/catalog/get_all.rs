use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::catalog::ProductCatalog;
use crate::domain::product::errors::CatalogError;
use crate::domain::product::model::Product;
use crate::domain::product::use_cases::get_all::GetAllProductsUseCase;

pub struct GetAllProductsUseCaseImpl {
    pub catalog: Arc<dyn ProductCatalog>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllProductsUseCase for GetAllProductsUseCaseImpl {
    async fn execute(&self) -> Result<Vec<Product>, CatalogError> {
        self.logger.debug("Listing catalog products");

        self.catalog.get_all().await
    }
}
