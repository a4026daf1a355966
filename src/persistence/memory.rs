//! In-process implementation of the PIN store.
//!
//! Used when `PERSISTENCE_ENABLED=false` and as the storage double in
//! tests. Rows live in a `Vec` behind an async lock; IDs come from an
//! atomic counter starting at 1, mirroring the auto-increment column of
//! the PostgreSQL store.

use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::models::PinRecord;
use super::store::PinStore;
use crate::error::ServiceError;

/// Volatile PIN store with the same contract as [`super::PostgresPinStore`].
#[derive(Debug, Default)]
pub struct MemoryPinStore {
    rows: RwLock<Vec<PinRecord>>,
    next_id: AtomicI64,
}

impl MemoryPinStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rows: RwLock::new(Vec::new()),
            next_id: AtomicI64::new(0),
        }
    }
}

#[async_trait]
impl PinStore for MemoryPinStore {
    async fn insert(&self, pin: i32) -> Result<PinRecord, ServiceError> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let record = PinRecord { id, pin };
        self.rows.write().await.push(record);
        Ok(record)
    }

    async fn exists(&self, pin: i32) -> Result<bool, ServiceError> {
        Ok(self.rows.read().await.iter().any(|r| r.pin == pin))
    }

    async fn list_all(&self) -> Result<Vec<PinRecord>, ServiceError> {
        Ok(self.rows.read().await.clone())
    }
}
