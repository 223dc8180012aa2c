//! Enumeration settings shared by the library and the CLI config file.

use super::symbols::MAX_REPRESENTABLE_L;
use crate::domain::{TermError, TermResult};
use serde::Deserialize;

pub const DEFAULT_GLOBAL_MAX_L: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct EnumerationConfig {
    /// Upper cap on total L regardless of the configuration's sum of l.
    pub global_max_l: u32,
}

impl Default for EnumerationConfig {
    fn default() -> Self {
        Self {
            global_max_l: DEFAULT_GLOBAL_MAX_L,
        }
    }
}

impl EnumerationConfig {
    pub fn with_global_max_l(global_max_l: u32) -> TermResult<Self> {
        let config = Self { global_max_l };
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_str(source: &str) -> TermResult<Self> {
        let config: Self = serde_json::from_str(source)
            .map_err(|error| TermError::Config(format!("failed to parse settings: {error}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> TermResult<()> {
        if self.global_max_l > MAX_REPRESENTABLE_L {
            return Err(TermError::Config(format!(
                "globalMaxL = {} exceeds the largest L with a spectroscopic letter ({})",
                self.global_max_l, MAX_REPRESENTABLE_L
            )));
        }
        Ok(())
    }
}
