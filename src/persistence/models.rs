//! Database models for issued PINs.

use serde::{Deserialize, Serialize};

/// An issued PIN row from the `pins` table.
///
/// Rows are insert-only: never updated, never deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PinRecord {
    /// Auto-increment row ID, assigned by storage, never reused.
    pub id: i64,
    /// The four-digit PIN value (1000–9999).
    pub pin: i32,
}
