//! Lightweight in-process metrics (dependency-free).
//!
//! Admission outcomes are counted with dynamic labels and rendered in
//! Prometheus text exposition format on demand; the host decides where the
//! rendered text goes.

pub mod metrics;

pub use metrics::AdmissionMetrics;
