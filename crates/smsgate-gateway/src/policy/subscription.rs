//! Subscription-to-user access guard.

use std::sync::Arc;

use smsgate_core::types::{CallerIdentity, SubscriptionId};

use super::{AdmissionDecision, DropReason};
use crate::telephony::{PermissionChecker, SubscriptionUserRegistry};

/// Decides whether a caller may act on a subscription.
///
/// Direct association is checked first; the cross-user interaction permission
/// is only consulted as a fallback, so the common single-user path never
/// requires broad permissions.
pub struct SubscriptionAccessGuard {
    subscriptions: Arc<dyn SubscriptionUserRegistry>,
    permissions: Arc<dyn PermissionChecker>,
}

impl SubscriptionAccessGuard {
    pub fn new(
        subscriptions: Arc<dyn SubscriptionUserRegistry>,
        permissions: Arc<dyn PermissionChecker>,
    ) -> Self {
        Self {
            subscriptions,
            permissions,
        }
    }

    pub fn authorize(
        &self,
        caller: &CallerIdentity,
        sub_id: SubscriptionId,
    ) -> AdmissionDecision {
        if self.subscriptions.is_associated(sub_id, caller.user_id) {
            return AdmissionDecision::Pass;
        }
        // Explicit override: the cross-user permission bypasses per-user
        // association entirely.
        if self.permissions.has_cross_user_permission(caller) {
            return AdmissionDecision::Pass;
        }
        tracing::warn!(
            sub_id,
            package = %caller.package,
            user_id = caller.user_id,
            "subscription not associated with calling user; dropping send"
        );
        AdmissionDecision::Drop {
            reason: DropReason::NotAssociatedWithUser,
        }
    }
}
