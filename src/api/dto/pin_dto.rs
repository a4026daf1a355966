//! PIN issuance and listing DTOs.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::persistence::PinRecord;

/// Request body for `POST /pincount`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct IssuePinsRequest {
    /// How many PINs to issue. Must be a positive integer.
    pub count: i64,
}

/// One issued PIN in the `POST /pincount` response.
#[derive(Debug, Serialize, ToSchema)]
pub struct IssuedPinDto {
    /// The issued four-digit PIN value.
    pub pin: i32,
}

/// One stored PIN in the `GET /pins` response.
#[derive(Debug, Serialize, ToSchema)]
pub struct PinRecordDto {
    /// Storage-assigned unique row ID.
    pub id: i64,
    /// The four-digit PIN value.
    pub pin: i32,
}

impl From<PinRecord> for PinRecordDto {
    fn from(record: PinRecord) -> Self {
        Self {
            id: record.id,
            pin: record.pin,
        }
    }
}
