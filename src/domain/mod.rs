//! Domain layer: PIN value rules and candidate generation.

pub mod generator;
pub mod pin;

pub use generator::{PinSource, RandomPinGenerator};
pub use pin::{PIN_MAX, PIN_MIN, is_obvious};
