//! Service layer: PIN issuance orchestration.

pub mod pin_service;

pub use pin_service::PinService;
