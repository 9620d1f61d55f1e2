//! Policy layer (FDN allow-list, subscription access, capability gating).
//!
//! Each gate produces an `AdmissionDecision` that the admission pipeline
//! consumes in a fixed order, short-circuiting on the first non-`Pass`.

pub mod fdn;
pub mod feature;
pub mod subscription;

use smsgate_core::error::ErrorCode;

pub use feature::FeatureRequirementGate;
pub use subscription::SubscriptionAccessGuard;

/// Decision from a single gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdmissionDecision {
    /// Let the request continue down the chain.
    Pass,
    /// Stop without transmitting and without surfacing an error.
    Drop { reason: DropReason },
    /// Stop and surface an error to the caller.
    Reject { code: ErrorCode, msg: &'static str },
}

/// Why a request was silently dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropReason {
    /// Subscription not associated with the calling user and no override.
    NotAssociatedWithUser,
    /// FDN restriction did not allow the (destination, smsc) pair.
    BlockedByFdn,
    /// Line is in emergency callback mode.
    EcmActive,
}

impl DropReason {
    /// Label used in logs and metrics.
    pub fn as_str(self) -> &'static str {
        match self {
            DropReason::NotAssociatedWithUser => "not_associated_with_user",
            DropReason::BlockedByFdn => "blocked_by_fdn",
            DropReason::EcmActive => "ecm_active",
        }
    }
}
