//! Send admission: the single decision path in front of the radio layer.

pub mod pipeline;

pub use pipeline::{SendAdmissionPipeline, SendKind};
