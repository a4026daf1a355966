//! PIN service: orchestrates generation, uniqueness resolution, and
//! persistence.

use std::sync::Arc;

use crate::domain::PinSource;
use crate::error::ServiceError;
use crate::persistence::{PinRecord, PinStore};

/// Maximum regeneration attempts when a candidate collides with a stored
/// PIN. When the budget is spent and the last candidate still collides,
/// the duplicate is accepted and issued anyway (logged as a warning).
pub const MAX_UNIQUENESS_ATTEMPTS: u32 = 10;

/// Orchestration layer for PIN issuance and listing.
///
/// Stateless coordinator: owns a [`PinSource`] for candidates and a
/// [`PinStore`] for persistence. Issuance is strictly sequential: each
/// PIN is inserted before the next candidate is drawn, so every
/// uniqueness check sees all previously issued PINs. Batching the
/// inserts would let one request issue the same value twice.
#[derive(Debug, Clone)]
pub struct PinService {
    store: Arc<dyn PinStore>,
    generator: Arc<dyn PinSource>,
}

impl PinService {
    /// Creates a new `PinService`.
    #[must_use]
    pub fn new(store: Arc<dyn PinStore>, generator: Arc<dyn PinSource>) -> Self {
        Self { store, generator }
    }

    /// Issues `count` PINs, persisting each one immediately, and returns
    /// the issued values in creation order.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::InvalidCount`] when `count <= 0` (no rows
    /// are written), or [`ServiceError::Persistence`] when storage fails
    /// mid-batch; rows committed before the failure are not rolled back.
    pub async fn issue(&self, count: i64) -> Result<Vec<i32>, ServiceError> {
        if count <= 0 {
            return Err(ServiceError::InvalidCount);
        }

        let mut issued = Vec::new();
        for _ in 0..count {
            let (pin, attempts) = self.resolve_unique().await?;
            let record = self.store.insert(pin).await?;
            tracing::debug!(pin = record.pin, id = record.id, attempts, "pin issued");
            issued.push(record.pin);
        }

        tracing::info!(count, "pins issued");
        Ok(issued)
    }

    /// Returns every issued PIN, unfiltered.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Persistence`] on storage failure.
    pub async fn list_all(&self) -> Result<Vec<PinRecord>, ServiceError> {
        self.store.list_all().await
    }

    /// Draws candidates until one does not collide with a stored PIN, or
    /// the attempt budget runs out.
    ///
    /// Returns the final candidate and the number of regenerations. The
    /// attempt counter starts at 0 and increments per regeneration; after
    /// [`MAX_UNIQUENESS_ATTEMPTS`] regenerations a still-colliding
    /// candidate is returned as-is.
    async fn resolve_unique(&self) -> Result<(i32, u32), ServiceError> {
        let mut candidate = self.generator.next_pin();
        let mut collides = self.store.exists(candidate).await?;
        let mut attempts = 0u32;

        while collides && attempts < MAX_UNIQUENESS_ATTEMPTS {
            candidate = self.generator.next_pin();
            collides = self.store.exists(candidate).await?;
            attempts += 1;
        }

        if collides {
            tracing::warn!(
                pin = candidate,
                attempts,
                "uniqueness retry budget exhausted, issuing duplicate pin"
            );
        }

        Ok((candidate, attempts))
    }
}
