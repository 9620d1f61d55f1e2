//! Substitutable test doubles for the platform collaborator seams.
//!
//! One `TestPlatform` implements every seam; tests flip its state between
//! calls to model the platform changing underneath the gateway.

#![allow(dead_code)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use smsgate_core::error::Result;
use smsgate_core::types::{
    CallerIdentity, FdnRecord, MessagePayload, ReceiptHandle, SendRequest, SubscriptionId,
    UserId,
};
use smsgate_gateway::config::{self, GatewayConfig};
use smsgate_gateway::state::GatewayState;
use smsgate_gateway::telephony::{
    AdnRecordSource, Collaborators, EmergencyNumberClassifier, PermissionChecker,
    PlatformFeatureRegistry, RadioLineState, SimProfile, SubscriptionUserRegistry,
    TransmissionService, ENFORCE_MESSAGING_FEATURE, FEATURE_TELEPHONY_MESSAGING,
};

pub const SMSC: &str = "+1206313004";
pub const CALLING_PACKAGE: &str = "com.example.messaging";
pub const CALLING_USER: UserId = 0;

#[derive(Default)]
pub struct TestPlatform {
    pub associated: AtomicBool,
    pub cross_user_permission: AtomicBool,
    pub has_messaging_feature: AtomicBool,
    pub fdn_available: AtomicBool,
    pub fdn_enabled: AtomicBool,
    pub fdn_records: Mutex<Option<Vec<FdnRecord>>>,
    pub smsc: Mutex<Option<String>>,
    pub emergency_numbers: Mutex<Vec<String>>,
    pub in_ecm: AtomicBool,
    pub sent: Mutex<Vec<SendRequest>>,
}

impl TestPlatform {
    /// Platform in its happy-path default state: single user, associated
    /// subscription, messaging feature present, FDN off, no ECM.
    pub fn new() -> Arc<Self> {
        let p = Arc::new(Self::default());
        p.associated.store(true, Ordering::SeqCst);
        p.has_messaging_feature.store(true, Ordering::SeqCst);
        p
    }

    pub fn collaborators(self: &Arc<Self>) -> Collaborators {
        Collaborators {
            adn: self.clone(),
            sim: self.clone(),
            emergency: self.clone(),
            subscriptions: self.clone(),
            permissions: self.clone(),
            features: self.clone(),
            radio: self.clone(),
            transmission: self.clone(),
        }
    }

    /// Turn the line FDN-restricted with the given SIM message center.
    pub fn enable_fdn(&self, smsc: &str) {
        self.fdn_available.store(true, Ordering::SeqCst);
        self.fdn_enabled.store(true, Ordering::SeqCst);
        *self.smsc.lock().unwrap() = Some(smsc.to_owned());
    }

    pub fn set_fdn_records(&self, records: Vec<FdnRecord>) {
        *self.fdn_records.lock().unwrap() = Some(records);
    }

    pub fn mark_emergency(&self, number: &str) {
        self.emergency_numbers.lock().unwrap().push(number.to_owned());
    }

    pub fn sent(&self) -> Vec<SendRequest> {
        self.sent.lock().unwrap().clone()
    }

    pub fn sent_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }
}

impl AdnRecordSource for TestPlatform {
    fn fdn_records_if_loaded(&self, _sub_id: SubscriptionId) -> Option<Vec<FdnRecord>> {
        self.fdn_records.lock().unwrap().clone()
    }
}

impl SimProfile for TestPlatform {
    fn is_fdn_available(&self, _sub_id: SubscriptionId) -> bool {
        self.fdn_available.load(Ordering::SeqCst)
    }

    fn is_fdn_enabled(&self, _sub_id: SubscriptionId) -> bool {
        self.fdn_enabled.load(Ordering::SeqCst)
    }

    fn smsc_address(&self, _sub_id: SubscriptionId) -> Option<String> {
        self.smsc.lock().unwrap().clone()
    }
}

impl EmergencyNumberClassifier for TestPlatform {
    fn is_emergency_number(&self, number: &str) -> bool {
        self.emergency_numbers.lock().unwrap().iter().any(|n| n == number)
    }
}

impl SubscriptionUserRegistry for TestPlatform {
    fn is_associated(&self, _sub_id: SubscriptionId, _user_id: UserId) -> bool {
        self.associated.load(Ordering::SeqCst)
    }
}

impl PermissionChecker for TestPlatform {
    fn has_cross_user_permission(&self, _caller: &CallerIdentity) -> bool {
        self.cross_user_permission.load(Ordering::SeqCst)
    }
}

impl PlatformFeatureRegistry for TestPlatform {
    fn has_feature(&self, feature: &str) -> bool {
        feature == FEATURE_TELEPHONY_MESSAGING && self.has_messaging_feature.load(Ordering::SeqCst)
    }
}

impl RadioLineState for TestPlatform {
    fn is_in_ecm(&self, _sub_id: SubscriptionId) -> bool {
        self.in_ecm.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TransmissionService for TestPlatform {
    async fn send(&self, request: SendRequest) -> Result<()> {
        self.sent.lock().unwrap().push(request);
        Ok(())
    }
}

pub fn base_config() -> GatewayConfig {
    config::load_from_str("version: 1\n").unwrap()
}

/// Config with messaging-feature enforcement rolled out to everyone and a
/// vendor partition new enough for the enforcement floor.
pub fn enforcing_config() -> GatewayConfig {
    let yaml = format!(
        "version: 1\ngateway:\n  vendor_api_level: 35\ncompat:\n  - id: {ENFORCE_MESSAGING_FEATURE}\n"
    );
    config::load_from_str(&yaml).unwrap()
}

pub fn state_with(cfg: GatewayConfig, platform: &Arc<TestPlatform>) -> GatewayState {
    GatewayState::new(cfg, platform.collaborators()).unwrap()
}

pub fn send_req(sub_id: SubscriptionId, dest: &str) -> SendRequest {
    SendRequest {
        sub_id,
        caller: CallerIdentity::new(CALLING_PACKAGE, CALLING_USER),
        dest_addr: dest.to_owned(),
        smsc_addr: None,
        payload: MessagePayload::Text("text".to_owned()),
        sent_receipt: Some(ReceiptHandle(1)),
        delivery_receipt: None,
        persist_message: true,
        message_id: 0,
    }
}

pub fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};
    let _ = fmt().with_env_filter(EnvFilter::from_default_env()).try_init();
}
