//! Collaborator seams onto the telephony platform.
//!
//! Every external dependency of the admission path is a narrow trait: one
//! platform-backed implementation lives in the host process, and tests
//! substitute their own. The gates only ever see already-resident state
//! through these queries; anything that could block (SIM record loads,
//! package lookups) stays behind the seam and reports "not yet available"
//! instead of waiting.

pub mod compat;

use std::sync::Arc;

use async_trait::async_trait;

use smsgate_core::error::Result;
use smsgate_core::types::{CallerIdentity, FdnRecord, SendRequest, SubscriptionId, UserId};

/// System feature id for outbound messaging capability.
pub const FEATURE_TELEPHONY_MESSAGING: &str = "hardware.telephony.messaging";

/// Compat change id holding newly-targeting callers to the messaging-feature
/// requirement on the public send APIs.
pub const ENFORCE_MESSAGING_FEATURE: u64 = 240813001;

/// SIM FDN elementary-file snapshots.
pub trait AdnRecordSource: Send + Sync {
    /// `None` while the records are still loading; the evaluator treats that
    /// as an empty list.
    fn fdn_records_if_loaded(&self, sub_id: SubscriptionId) -> Option<Vec<FdnRecord>>;
}

/// FDN state and message-center provisioning of one SIM profile.
pub trait SimProfile: Send + Sync {
    fn is_fdn_available(&self, sub_id: SubscriptionId) -> bool;
    fn is_fdn_enabled(&self, sub_id: SubscriptionId) -> bool;
    /// Message-center address from the SIM EF, when provisioned.
    fn smsc_address(&self, sub_id: SubscriptionId) -> Option<String>;
}

pub trait EmergencyNumberClassifier: Send + Sync {
    fn is_emergency_number(&self, number: &str) -> bool;
}

pub trait SubscriptionUserRegistry: Send + Sync {
    fn is_associated(&self, sub_id: SubscriptionId, user_id: UserId) -> bool;
}

pub trait PermissionChecker: Send + Sync {
    /// Whether the caller holds the cross-user interaction permission.
    fn has_cross_user_permission(&self, caller: &CallerIdentity) -> bool;
}

pub trait PlatformFeatureRegistry: Send + Sync {
    fn has_feature(&self, feature: &str) -> bool;
}

/// Per-caller compatibility-change framework.
pub trait CompatibilityToggle: Send + Sync {
    fn is_enabled_for_caller(&self, change_id: u64, caller: &CallerIdentity) -> bool;
}

pub trait RadioLineState: Send + Sync {
    /// True while the line sits in emergency callback mode.
    fn is_in_ecm(&self, sub_id: SubscriptionId) -> bool;
}

/// Hands an admitted request to the radio layer.
///
/// Fire-and-forget: outcome delivery happens through the request's receipt
/// handles, never through this return value. A request that was dropped by a
/// gate must not reach this trait at all.
#[async_trait]
pub trait TransmissionService: Send + Sync {
    async fn send(&self, request: SendRequest) -> Result<()>;
}

/// Bundle of platform collaborators injected at gateway construction.
#[derive(Clone)]
pub struct Collaborators {
    pub adn: Arc<dyn AdnRecordSource>,
    pub sim: Arc<dyn SimProfile>,
    pub emergency: Arc<dyn EmergencyNumberClassifier>,
    pub subscriptions: Arc<dyn SubscriptionUserRegistry>,
    pub permissions: Arc<dyn PermissionChecker>,
    pub features: Arc<dyn PlatformFeatureRegistry>,
    pub radio: Arc<dyn RadioLineState>,
    pub transmission: Arc<dyn TransmissionService>,
}
