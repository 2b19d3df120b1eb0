use async_trait::async_trait;

use super::errors::CatalogError;
use super::model::Product;

/// In-memory product catalog for the session, keyed by product id.
///
/// Implementations memoize the upstream listing: `load` performs at most one
/// fetch per session, and every read degrades gracefully when the upstream is
/// unavailable (`get_by_id` answers "not found" instead of failing).
#[async_trait]
pub trait ProductCatalog: Send + Sync {
    /// Idempotent; a second call after a successful load performs no fetch.
    async fn load(&self) -> Result<(), CatalogError>;
    async fn get_all(&self) -> Result<Vec<Product>, CatalogError>;
    async fn get_by_id(&self, id: u64) -> Option<Product>;
    async fn get_by_category(&self, category: &str) -> Result<Vec<Product>, CatalogError>;
    /// Distinct category values in first-seen listing order.
    async fn get_categories(&self) -> Result<Vec<String>, CatalogError>;
}
