use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::catalog::ProductCatalog;
use crate::domain::product::errors::CatalogError;
use crate::domain::product::model::Product;
use crate::domain::product::use_cases::get_by_category::{
    GetProductsByCategoryParams, GetProductsByCategoryUseCase,
};

pub struct GetProductsByCategoryUseCaseImpl {
    pub catalog: Arc<dyn ProductCatalog>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetProductsByCategoryUseCase for GetProductsByCategoryUseCaseImpl {
    async fn execute(
        &self,
        params: GetProductsByCategoryParams,
    ) -> Result<Vec<Product>, CatalogError> {
        self.logger
            .debug(&format!("Listing products in category {}", params.category));

        self.catalog.get_by_category(&params.category).await
    }
}
