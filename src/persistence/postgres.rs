//! PostgreSQL implementation of the PIN store.

use async_trait::async_trait;
use sqlx::PgPool;

use super::models::PinRecord;
use super::store::PinStore;
use crate::error::ServiceError;

/// PostgreSQL-backed PIN store using `sqlx::PgPool`.
#[derive(Debug, Clone)]
pub struct PostgresPinStore {
    pool: PgPool,
}

impl PostgresPinStore {
    /// Creates a new store with the given connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PinStore for PostgresPinStore {
    async fn insert(&self, pin: i32) -> Result<PinRecord, ServiceError> {
        let (id, pin) = sqlx::query_as::<_, (i64, i32)>(
            "INSERT INTO pins (pin) VALUES ($1) RETURNING id, pin",
        )
        .bind(pin)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| ServiceError::Persistence(e.to_string()))?;

        Ok(PinRecord { id, pin })
    }

    async fn exists(&self, pin: i32) -> Result<bool, ServiceError> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM pins WHERE pin = $1)",
        )
        .bind(pin)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| ServiceError::Persistence(e.to_string()))?;

        Ok(exists)
    }

    async fn list_all(&self) -> Result<Vec<PinRecord>, ServiceError> {
        let rows = sqlx::query_as::<_, (i64, i32)>("SELECT id, pin FROM pins ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| ServiceError::Persistence(e.to_string()))?;

        Ok(rows.into_iter().map(|(id, pin)| PinRecord { id, pin }).collect())
    }
}
