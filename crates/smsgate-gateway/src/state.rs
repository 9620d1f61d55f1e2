//! Shared gateway state for smsGate.
//!
//! Wires config, the compiled compat toggle, the platform collaborators, the
//! WAP size cache, and the admission pipeline. Startup errors are explicit
//! (Result instead of panic).

use std::sync::Arc;

use smsgate_core::error::{Result, SmsGateError};
use smsgate_core::types::{SendRequest, SubscriptionId};

use crate::admission::SendAdmissionPipeline;
use crate::cache::WapPushSizeCache;
use crate::config::GatewayConfig;
use crate::obs::AdmissionMetrics;
use crate::telephony::compat::StaticCompatToggle;
use crate::telephony::{
    Collaborators, CompatibilityToggle, ENFORCE_MESSAGING_FEATURE, FEATURE_TELEPHONY_MESSAGING,
};

const FAIL_FAST_ON_MISSING_FEATURE: bool = false; // if changed to true, boot fails.

#[derive(Clone)]
pub struct GatewayState {
    inner: Arc<GatewayStateInner>,
}

struct GatewayStateInner {
    cfg: GatewayConfig,
    pipeline: SendAdmissionPipeline,
    wap_sizes: WapPushSizeCache,
    metrics: Arc<AdmissionMetrics>,
}

impl GatewayState {
    /// Build gateway state from validated config and platform collaborators.
    pub fn new(cfg: GatewayConfig, collab: Collaborators) -> Result<Self> {
        // 1) Compile the compat toggle from config.
        let compat: Arc<dyn CompatibilityToggle> =
            Arc::new(StaticCompatToggle::from_config(&cfg.compat));

        // enforcement <-> device capability sanity check
        let enforcement_on = cfg
            .compat
            .iter()
            .any(|c| c.id == ENFORCE_MESSAGING_FEATURE && c.default_on);
        if enforcement_on && !collab.features.has_feature(FEATURE_TELEPHONY_MESSAGING) {
            tracing::warn!(
                feature = FEATURE_TELEPHONY_MESSAGING,
                "messaging-feature enforcement is on but the device does not report the feature; gated callers will be refused"
            );
            if FAIL_FAST_ON_MISSING_FEATURE {
                return Err(SmsGateError::BadRequest(
                    "messaging-feature enforcement enabled on a device without the feature".into(),
                ));
            }
        }

        // 2) Create core components.
        let metrics = Arc::new(AdmissionMetrics::default());
        let wap_sizes = WapPushSizeCache::new();
        let pipeline = SendAdmissionPipeline::new(
            cfg.gateway.vendor_api_level,
            collab,
            compat,
            Arc::clone(&metrics),
        );

        Ok(Self {
            inner: Arc::new(GatewayStateInner {
                cfg,
                pipeline,
                wap_sizes,
                metrics,
            }),
        })
    }

    pub fn cfg(&self) -> &GatewayConfig {
        &self.inner.cfg
    }

    pub fn pipeline(&self) -> &SendAdmissionPipeline {
        &self.inner.pipeline
    }

    /// Handle the push receiver writes learned message sizes through.
    pub fn wap_sizes(&self) -> &WapPushSizeCache {
        &self.inner.wap_sizes
    }

    pub fn metrics(&self) -> &AdmissionMetrics {
        &self.inner.metrics
    }

    // Public API surface, one method per exposed operation.

    pub async fn send_text_for_subscriber(&self, request: SendRequest) -> Result<()> {
        self.inner.pipeline.send_text(request).await
    }

    pub async fn send_data_for_subscriber(&self, request: SendRequest) -> Result<()> {
        self.inner.pipeline.send_data(request).await
    }

    pub async fn send_visual_voicemail_for_subscriber(&self, request: SendRequest) -> Result<()> {
        self.inner.pipeline.send_visual_voicemail(request).await
    }

    pub fn is_number_blocked_by_fdn(
        &self,
        sub_id: SubscriptionId,
        dest_addr: &str,
        calling_package: &str,
    ) -> bool {
        self.inner
            .pipeline
            .is_number_blocked_by_fdn(sub_id, dest_addr, calling_package)
    }

    /// Size previously learned for a WAP push, looked up by its text key.
    pub fn wap_message_size(&self, key_text: &str) -> Result<i64> {
        self.inner.wap_sizes.size_for_key_text(key_text)
    }
}
