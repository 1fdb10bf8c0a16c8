//! Site configuration

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::content::SiteContent;
use crate::motion::MotionConfig;
use crate::timer::check_period;
use crate::{CoreError, CoreResult};

/// Complete site configuration. Every field falls back to its default, so
/// an embedded config block only needs the values it overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub brand: String,
    /// Year shown in the navigation badge
    pub established: u16,
    pub contact_email: String,
    /// Hero word rotation cadence (ms)
    pub rotation_interval_ms: u64,
    pub motion: MotionConfig,
    pub content: SiteContent,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            brand: "Awkward Ventures".to_string(),
            established: 2026,
            contact_email: "hello@awkward.ventures".to_string(),
            rotation_interval_ms: 2500,
            motion: MotionConfig::default(),
            content: SiteContent::default(),
        }
    }
}

impl SiteConfig {
    /// Parse and validate a JSON config block.
    pub fn from_json(raw: &str) -> CoreResult<Self> {
        let config: SiteConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> CoreResult<()> {
        check_period(self.rotation_interval())?;
        if self.contact_email.trim().is_empty() {
            return Err(CoreError::Config("contact_email is empty".to_string()));
        }
        self.motion.validate()
    }

    pub fn rotation_interval(&self) -> Duration {
        Duration::from_millis(self.rotation_interval_ms)
    }

    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.contact_email)
    }
}
