//! Messaging capability gate for the public per-subscriber entry points.
//!
//! Staged rollout: callers for whom the compat change is enabled are held to
//! the capability contract; legacy callers stay ungated. Not a capability
//! probe.

use std::sync::Arc;

use smsgate_core::error::ErrorCode;
use smsgate_core::types::CallerIdentity;

use super::AdmissionDecision;
use crate::telephony::{
    CompatibilityToggle, PlatformFeatureRegistry, ENFORCE_MESSAGING_FEATURE,
    FEATURE_TELEPHONY_MESSAGING,
};

/// Vendor partitions frozen before this API level stay ungated.
const MIN_ENFORCED_VENDOR_API: u32 = 35;

pub struct FeatureRequirementGate {
    features: Arc<dyn PlatformFeatureRegistry>,
    compat: Arc<dyn CompatibilityToggle>,
    vendor_api_level: u32,
}

impl FeatureRequirementGate {
    pub fn new(
        features: Arc<dyn PlatformFeatureRegistry>,
        compat: Arc<dyn CompatibilityToggle>,
        vendor_api_level: u32,
    ) -> Self {
        Self {
            features,
            compat,
            vendor_api_level,
        }
    }

    /// Fail closed only when enforcement applies to this caller and the
    /// device does not report the messaging feature.
    pub fn check(&self, caller: &CallerIdentity) -> AdmissionDecision {
        if !self
            .compat
            .is_enabled_for_caller(ENFORCE_MESSAGING_FEATURE, caller)
        {
            return AdmissionDecision::Pass;
        }
        if self.vendor_api_level < MIN_ENFORCED_VENDOR_API {
            return AdmissionDecision::Pass;
        }
        if self.features.has_feature(FEATURE_TELEPHONY_MESSAGING) {
            return AdmissionDecision::Pass;
        }
        AdmissionDecision::Reject {
            code: ErrorCode::Unsupported,
            msg: "device lacks telephony messaging feature",
        }
    }
}
