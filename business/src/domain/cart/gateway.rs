use async_trait::async_trait;

use crate::domain::errors::GatewayError;
use crate::domain::shared::value_objects::ShopperId;

use super::model::RemoteCartRecord;

/// Port to the remote cart boundary. The remote side is a mirror: it is read
/// once at session start and written best-effort after local mutations.
#[async_trait]
pub trait CartGateway: Send + Sync {
    /// Fetches the shopper's current cart record, `Ok(None)` when the remote
    /// side has no cart for this shopper.
    async fn fetch_current(
        &self,
        shopper_id: ShopperId,
    ) -> Result<Option<RemoteCartRecord>, GatewayError>;

    /// Persists the full cart state. Implementations may not actually retain
    /// the write; callers treat the push as fire-and-forget.
    async fn push(&self, record: &RemoteCartRecord) -> Result<(), GatewayError>;
}
