//! The send admission pipeline.
//!
//! Every outbound send passes through the same linear chain: capability gate,
//! subscription access, FDN allow-list, then (visual voicemail only) the ECM
//! gate. Each request is evaluated exactly once and fresh — no memoization,
//! no retry; a deny is terminal for that request.
//!
//! Denial surfacing is deliberately asymmetric: a missing capability is an
//! error the caller sees, while authorization/FDN/ECM denials are silent
//! no-ops. Crashing the caller over a denied permission would be worse than
//! dropping the message, so only capability and cache-miss failures surface.

use std::sync::Arc;

use smsgate_core::error::{ErrorCode, Result, SmsGateError};
use smsgate_core::types::{SendRequest, SubscriptionId};

use crate::obs::AdmissionMetrics;
use crate::policy::fdn::is_blocked_by_fdn;
use crate::policy::{
    AdmissionDecision, DropReason, FeatureRequirementGate, SubscriptionAccessGuard,
};
use crate::telephony::{
    AdnRecordSource, Collaborators, CompatibilityToggle, EmergencyNumberClassifier,
    RadioLineState, SimProfile, TransmissionService,
};

/// Which public entry point a request came in through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendKind {
    Text,
    Data,
    VisualVoicemail,
}

impl SendKind {
    pub fn as_str(self) -> &'static str {
        match self {
            SendKind::Text => "send_text",
            SendKind::Data => "send_data",
            SendKind::VisualVoicemail => "send_visual_voicemail",
        }
    }

    /// Only visual-voicemail sends are suppressed by emergency callback mode.
    fn ecm_gated(self) -> bool {
        matches!(self, SendKind::VisualVoicemail)
    }
}

/// Composes the gates into the one admission decision every outbound send
/// must pass. Construct once at startup, then share.
pub struct SendAdmissionPipeline {
    feature_gate: FeatureRequirementGate,
    access_guard: SubscriptionAccessGuard,
    adn: Arc<dyn AdnRecordSource>,
    sim: Arc<dyn SimProfile>,
    emergency: Arc<dyn EmergencyNumberClassifier>,
    radio: Arc<dyn RadioLineState>,
    transmission: Arc<dyn TransmissionService>,
    metrics: Arc<AdmissionMetrics>,
}

impl SendAdmissionPipeline {
    pub fn new(
        vendor_api_level: u32,
        collab: Collaborators,
        compat: Arc<dyn CompatibilityToggle>,
        metrics: Arc<AdmissionMetrics>,
    ) -> Self {
        let feature_gate =
            FeatureRequirementGate::new(collab.features, compat, vendor_api_level);
        let access_guard =
            SubscriptionAccessGuard::new(collab.subscriptions, collab.permissions);
        Self {
            feature_gate,
            access_guard,
            adn: collab.adn,
            sim: collab.sim,
            emergency: collab.emergency,
            radio: collab.radio,
            transmission: collab.transmission,
            metrics,
        }
    }

    /// Public text-send entry point.
    pub async fn send_text(&self, request: SendRequest) -> Result<()> {
        self.submit(SendKind::Text, request).await
    }

    /// Public data-send entry point; same chain as text.
    pub async fn send_data(&self, request: SendRequest) -> Result<()> {
        self.submit(SendKind::Data, request).await
    }

    /// Visual-voicemail send; additionally suppressed while the line is in
    /// emergency callback mode.
    pub async fn send_visual_voicemail(&self, request: SendRequest) -> Result<()> {
        self.submit(SendKind::VisualVoicemail, request).await
    }

    async fn submit(&self, kind: SendKind, request: SendRequest) -> Result<()> {
        // 1) Capability gate, before any subscription state is touched.
        match self.feature_gate.check(&request.caller) {
            AdmissionDecision::Pass => {}
            AdmissionDecision::Drop { reason } => return self.drop_request(kind, reason),
            AdmissionDecision::Reject { code, msg } => {
                return self.reject_request(kind, code, msg)
            }
        }

        // 2) Subscription-to-user access.
        match self.access_guard.authorize(&request.caller, request.sub_id) {
            AdmissionDecision::Pass => {}
            AdmissionDecision::Drop { reason } => return self.drop_request(kind, reason),
            AdmissionDecision::Reject { code, msg } => {
                return self.reject_request(kind, code, msg)
            }
        }

        // 3) FDN allow-list, only when the line is FDN-restricted.
        if self.fdn_blocks(request.sub_id, &request.dest_addr, request.smsc_addr.as_deref()) {
            return self.drop_request(kind, DropReason::BlockedByFdn);
        }

        // 4) ECM gate.
        if kind.ecm_gated() && self.radio.is_in_ecm(request.sub_id) {
            return self.drop_request(kind, DropReason::EcmActive);
        }

        // 5) Forward unmodified; receipts stay with the request.
        self.metrics.record_forwarded(kind.as_str());
        tracing::debug!(
            entry = kind.as_str(),
            sub_id = request.sub_id,
            message_id = request.message_id,
            "send admitted, forwarding to transmission"
        );
        self.transmission.send(request).await
    }

    /// Deny-with-diagnostic: the only denial class callers ever see as an error.
    fn reject_request(&self, kind: SendKind, code: ErrorCode, msg: &'static str) -> Result<()> {
        self.metrics.record_rejected(kind.as_str(), code);
        tracing::warn!(entry = kind.as_str(), code = code.as_str(), "send rejected");
        Err(match code {
            ErrorCode::Unsupported => SmsGateError::Unsupported(msg.into()),
            ErrorCode::NotFound => SmsGateError::NotFound(msg.into()),
            _ => SmsGateError::BadRequest(msg.into()),
        })
    }

    /// Silent deny: no transmission, no receipt delivery, no error.
    fn drop_request(&self, kind: SendKind, reason: DropReason) -> Result<()> {
        self.metrics.record_dropped(kind.as_str(), reason);
        tracing::info!(
            entry = kind.as_str(),
            reason = reason.as_str(),
            "send suppressed"
        );
        Ok(())
    }

    /// Public FDN probe: false whenever the line is not FDN-restricted.
    pub fn is_number_blocked_by_fdn(
        &self,
        sub_id: SubscriptionId,
        dest_addr: &str,
        calling_package: &str,
    ) -> bool {
        let blocked = self.fdn_blocks(sub_id, dest_addr, None);
        if blocked {
            tracing::info!(sub_id, package = calling_package, "FDN probe: number blocked");
        }
        blocked
    }

    fn fdn_blocks(
        &self,
        sub_id: SubscriptionId,
        dest_addr: &str,
        smsc_override: Option<&str>,
    ) -> bool {
        if !(self.sim.is_fdn_available(sub_id) && self.sim.is_fdn_enabled(sub_id)) {
            return false;
        }

        // Not yet loaded is an empty list, which blocks everything
        // non-emergency while FDN is enabled.
        let records = self.adn.fdn_records_if_loaded(sub_id).unwrap_or_default();
        let smsc = match smsc_override {
            Some(s) => s.to_owned(),
            None => self.sim.smsc_address(sub_id).unwrap_or_default(),
        };

        let blocked = is_blocked_by_fdn(
            &records,
            dest_addr,
            &smsc,
            self.emergency.is_emergency_number(dest_addr),
        );
        self.metrics.record_fdn_check(blocked);
        if blocked {
            tracing::warn!(sub_id, "destination blocked by FDN restriction");
        }
        blocked
    }
}
