//! Shared application state injected into all Axum handlers.

use std::sync::Arc;

use crate::service::PinService;

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// PIN service for all business logic.
    pub pin_service: Arc<PinService>,
}
