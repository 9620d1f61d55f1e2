//! Top-level facade crate for smsGate.
//!
//! Re-exports core contracts and the gateway library so embedders can depend on a single crate.

pub mod core {
    pub use smsgate_core::*;
}

pub mod gateway {
    pub use smsgate_gateway::*;
}
