use serde::Deserialize;
use smsgate_core::error::{Result, SmsGateError};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GatewayConfig {
    pub version: u32,

    #[serde(default)]
    pub gateway: GatewaySection,

    #[serde(default)]
    pub compat: Vec<CompatChangeConfig>,
}

impl GatewayConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(SmsGateError::UnsupportedVersion);
        }

        self.gateway.validate()?;

        let mut seen = std::collections::HashSet::new();
        for c in &self.compat {
            if !seen.insert(c.id) {
                return Err(SmsGateError::BadRequest(format!(
                    "duplicate compat change id: {}",
                    c.id
                )));
            }
        }

        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GatewaySection {
    /// API level the vendor partition was frozen at; drives the capability
    /// enforcement floor.
    #[serde(default = "default_vendor_api_level")]
    pub vendor_api_level: u32,
}

impl Default for GatewaySection {
    fn default() -> Self {
        Self {
            vendor_api_level: default_vendor_api_level(),
        }
    }
}

impl GatewaySection {
    pub fn validate(&self) -> Result<()> {
        if !(29..=45).contains(&self.vendor_api_level) {
            return Err(SmsGateError::BadRequest(
                "gateway.vendor_api_level must be between 29 and 45".into(),
            ));
        }
        Ok(())
    }
}

fn default_vendor_api_level() -> u32 {
    34
}

/// One staged-rollout compatibility change.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CompatChangeConfig {
    pub id: u64,

    /// Whether the change applies to callers with no explicit override.
    #[serde(default = "default_change_on")]
    pub default_on: bool,

    /// Packages the change is force-disabled for.
    #[serde(default)]
    pub disabled_packages: Vec<String>,
}

fn default_change_on() -> bool {
    true
}
