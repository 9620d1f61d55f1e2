//! smsGate gateway library entry.
//!
//! This crate wires the config, policy gates, platform collaborator seams,
//! WAP size cache, and the send admission pipeline into a cohesive admission
//! stack. It is intended to be embedded by the host telephony process and
//! driven by integration tests.

pub mod admission;
pub mod cache;
pub mod config;
pub mod obs;
pub mod policy;
pub mod state;
pub mod telephony;
