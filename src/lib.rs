//! # pinforge
//!
//! REST API service that issues four-digit numeric PINs and lists the
//! ones issued so far. Each PIN is drawn uniformly from [1000, 9999],
//! filtered for "obvious" values (all digits identical), checked for
//! collisions against the store with a bounded retry budget, and
//! persisted immediately.
//!
//! ## Architecture
//!
//! ```text
//! Clients (HTTP)
//!     │
//!     ├── REST Handlers (api/)
//!     │
//!     ├── PinService (service/)
//!     │       ├── PinSource (domain/)
//!     │       └── PinStore (persistence/)
//!     │
//!     └── PostgreSQL (or in-memory) Persistence
//! ```

pub mod api;
pub mod app_state;
pub mod config;
pub mod domain;
pub mod error;
pub mod persistence;
pub mod service;
