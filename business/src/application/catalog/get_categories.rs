use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::catalog::ProductCatalog;
use crate::domain::product::errors::CatalogError;
use crate::domain::product::use_cases::get_categories::GetCategoriesUseCase;

pub struct GetCategoriesUseCaseImpl {
    pub catalog: Arc<dyn ProductCatalog>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetCategoriesUseCase for GetCategoriesUseCaseImpl {
    async fn execute(&self) -> Result<Vec<String>, CatalogError> {
        self.logger.debug("Listing catalog categories");

        self.catalog.get_categories().await
    }
}
