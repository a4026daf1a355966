//! Data Transfer Objects for REST request/response serialization.

pub mod pin_dto;

pub use pin_dto::*;
