use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::logger::Logger;
use crate::domain::product::catalog::ProductCatalog;
use crate::domain::product::errors::CatalogError;
use crate::domain::product::gateway::ProductGateway;
use crate::domain::product::model::Product;

struct CatalogSnapshot {
    ordered: Vec<Product>,
    by_id: HashMap<u64, Product>,
    categories: Vec<String>,
}

impl CatalogSnapshot {
    fn build(products: Vec<Product>) -> Self {
        let mut by_id = HashMap::with_capacity(products.len());
        let mut categories: Vec<String> = Vec::new();
        for product in &products {
            by_id.insert(product.id, product.clone());
            if !categories.contains(&product.category) {
                categories.push(product.category.clone());
            }
        }
        Self {
            ordered: products,
            by_id,
            categories,
        }
    }
}

/// Memoizing catalog: the first successful read fetches the upstream listing
/// once and every later read is served from the snapshot. A failed fetch
/// leaves the cache empty so the next read retries.
pub struct CatalogCache {
    gateway: Arc<dyn ProductGateway>,
    logger: Arc<dyn Logger>,
    // The async mutex is held across the fetch, so concurrent first reads
    // collapse into a single upstream call.
    snapshot: Mutex<Option<Arc<CatalogSnapshot>>>,
}

impl CatalogCache {
    pub fn new(gateway: Arc<dyn ProductGateway>, logger: Arc<dyn Logger>) -> Self {
        Self {
            gateway,
            logger,
            snapshot: Mutex::new(None),
        }
    }

    async fn snapshot(&self) -> Result<Arc<CatalogSnapshot>, CatalogError> {
        let mut guard = self.snapshot.lock().await;
        if let Some(snapshot) = guard.as_ref() {
            return Ok(snapshot.clone());
        }

        let products = self.gateway.fetch_all().await.map_err(|err| {
            self.logger
                .warn(&format!("Product catalog load failed: {}", err));
            err
        })?;

        let snapshot = Arc::new(CatalogSnapshot::build(products));
        self.logger.info(&format!(
            "Product catalog loaded: {} products, {} categories",
            snapshot.ordered.len(),
            snapshot.categories.len()
        ));
        *guard = Some(snapshot.clone());
        Ok(snapshot)
    }
}

#[async_trait]
impl ProductCatalog for CatalogCache {
    async fn load(&self) -> Result<(), CatalogError> {
        self.snapshot().await.map(|_| ())
    }

    async fn get_all(&self) -> Result<Vec<Product>, CatalogError> {
        Ok(self.snapshot().await?.ordered.clone())
    }

    async fn get_by_id(&self, id: u64) -> Option<Product> {
        self.snapshot().await.ok()?.by_id.get(&id).cloned()
    }

    async fn get_by_category(&self, category: &str) -> Result<Vec<Product>, CatalogError> {
        Ok(self
            .snapshot()
            .await?
            .ordered
            .iter()
            .filter(|p| p.category == category)
            .cloned()
            .collect())
    }

    async fn get_categories(&self) -> Result<Vec<String>, CatalogError> {
        Ok(self.snapshot().await?.categories.clone())
    }
}
