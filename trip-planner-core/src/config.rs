//! Planner configuration
use crate::error::ConfigError;
use crate::suggestions::SUGGESTION_DELAY_MS;
use serde::{Deserialize, Serialize};

/// Tunables for a planner instance. Missing JSON fields take the defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// Upper bound on trip length; durations above it are capped
    pub max_days: u32,
    pub suggestion_delay_ms: u64,
    pub currency: String,
    /// City shown on itinerary days built from customizations
    pub default_city: String,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            max_days: 7,
            suggestion_delay_ms: SUGGESTION_DELAY_MS,
            currency: "AED".to_string(),
            default_city: crate::itinerary::DEFAULT_CITY.to_string(),
        }
    }
}

impl PlannerConfig {
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or `max_days` is zero.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// # Errors
    ///
    /// Returns an error if `max_days` is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_days == 0 {
            return Err(ConfigError::ZeroMaxDays);
        }
        Ok(())
    }

    /// Clamp a requested duration into `1..=max_days`.
    #[must_use]
    pub fn clamp_duration(&self, requested: u32) -> u32 {
        requested.clamp(1, self.max_days.max(1))
    }
}
