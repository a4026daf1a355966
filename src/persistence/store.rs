//! Storage trait for issued PINs.

use async_trait::async_trait;

use super::models::PinRecord;
use crate::error::ServiceError;

/// Durable store of issued PINs.
///
/// The store assigns row IDs on insert and answers equality lookups and
/// full scans. It deliberately carries no uniqueness constraint on the
/// PIN value: collision avoidance lives in the issuance logic, and its
/// retry budget is allowed to give up (see `PinService::resolve_unique`).
#[async_trait]
pub trait PinStore: Send + Sync + std::fmt::Debug {
    /// Inserts a new PIN and returns the stored row with its assigned ID.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Persistence`] on storage failure.
    async fn insert(&self, pin: i32) -> Result<PinRecord, ServiceError>;

    /// Returns `true` if any stored row has the given PIN value.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Persistence`] on storage failure.
    async fn exists(&self, pin: i32) -> Result<bool, ServiceError>;

    /// Returns every stored row in creation order.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Persistence`] on storage failure.
    async fn list_all(&self) -> Result<Vec<PinRecord>, ServiceError>;
}
