//! smsGate core: admission contracts, error types, and the cache key codec.
//!
//! This crate defines the request/identity contracts and error surface shared
//! by the gateway and its embedders. It intentionally carries no transport or
//! runtime dependencies so it can be reused in multiple contexts.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths must surface as `SmsGateError`/`Result` so host
//! processes do not crash on malformed input.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod latin1;
pub mod types;

/// Shared result type.
pub use error::{Result, SmsGateError};
