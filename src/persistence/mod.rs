//! Persistence layer: durable storage of issued PINs.
//!
//! Provides the [`PinStore`] trait plus two implementations: a PostgreSQL
//! store backed by `sqlx::PgPool` and an in-process store used when
//! persistence is disabled and by tests.

pub mod memory;
pub mod models;
pub mod postgres;
pub mod store;

pub use memory::MemoryPinStore;
pub use models::PinRecord;
pub use postgres::PostgresPinStore;
pub use store::PinStore;
