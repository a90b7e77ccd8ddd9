use crate::utils::error::{RecError, Result};
use crate::utils::validation::{validate_fraction, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Engine tunables. Defaults reproduce the shipped policy; a TOML settings
/// file may override any subset of fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineSettings {
    /// Fuzzy-match acceptance threshold on the 0-100 partial-ratio scale.
    pub match_threshold: u32,
    /// Budgets at or above this take the GPU-first selection branch.
    pub gpu_first_budget: f64,
    /// Allocation overrun tolerated for the GPU on the GPU-first branch.
    pub gpu_budget_overrun: f64,
    /// CPU share of total budget once the GPU-first branch fires.
    pub gpu_first_cpu_fraction: f64,
    /// Spare budget below this skips the upgrade pass.
    pub spare_budget_floor: f64,
    /// Fixed auxiliary line items added to the reported total.
    pub storage_price: f64,
    pub cooler_price: f64,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            match_threshold: crate::core::matcher::MATCH_THRESHOLD,
            gpu_first_budget: 1000.0,
            gpu_budget_overrun: 1.2,
            gpu_first_cpu_fraction: 0.20,
            spare_budget_floor: 100.0,
            storage_price: 50.0,
            cooler_price: 30.0,
        }
    }
}

impl EngineSettings {
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let settings: Self = toml::from_str(&text)?;
        settings.validate()?;
        Ok(settings)
    }
}

impl Validate for EngineSettings {
    fn validate(&self) -> Result<()> {
        if self.match_threshold > 100 {
            return Err(RecError::InvalidConfigValueError {
                field: "match_threshold".to_string(),
                value: self.match_threshold.to_string(),
                reason: "Threshold is a 0-100 score".to_string(),
            });
        }
        if !self.gpu_budget_overrun.is_finite() || self.gpu_budget_overrun < 1.0 {
            return Err(RecError::InvalidConfigValueError {
                field: "gpu_budget_overrun".to_string(),
                value: self.gpu_budget_overrun.to_string(),
                reason: "Overrun is a multiplier of at least 1.0".to_string(),
            });
        }
        validate_fraction("gpu_first_cpu_fraction", self.gpu_first_cpu_fraction)?;
        for (field, value) in [
            ("gpu_first_budget", self.gpu_first_budget),
            ("spare_budget_floor", self.spare_budget_floor),
            ("storage_price", self.storage_price),
            ("cooler_price", self.cooler_price),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(RecError::InvalidConfigValueError {
                    field: field.to_string(),
                    value: value.to_string(),
                    reason: "Value cannot be negative".to_string(),
                });
            }
        }
        Ok(())
    }
}
