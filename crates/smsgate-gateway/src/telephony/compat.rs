//! Config-backed compatibility toggle.

use std::collections::{HashMap, HashSet};

use smsgate_core::types::CallerIdentity;

use super::CompatibilityToggle;
use crate::config::schema::CompatChangeConfig;

struct ChangeState {
    default_on: bool,
    disabled_packages: HashSet<String>,
}

/// Compatibility toggle compiled from gateway config.
///
/// A change not listed in config is treated as disabled, which keeps the
/// associated enforcement off for every caller until it is rolled out.
pub struct StaticCompatToggle {
    changes: HashMap<u64, ChangeState>,
}

impl StaticCompatToggle {
    pub fn from_config(changes: &[CompatChangeConfig]) -> Self {
        let changes = changes
            .iter()
            .map(|c| {
                (
                    c.id,
                    ChangeState {
                        default_on: c.default_on,
                        disabled_packages: c.disabled_packages.iter().cloned().collect(),
                    },
                )
            })
            .collect();
        Self { changes }
    }
}

impl CompatibilityToggle for StaticCompatToggle {
    fn is_enabled_for_caller(&self, change_id: u64, caller: &CallerIdentity) -> bool {
        match self.changes.get(&change_id) {
            Some(c) if c.disabled_packages.contains(&caller.package) => false,
            Some(c) => c.default_on,
            None => false,
        }
    }
}
