use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Tunables for the projection engine. Every field falls back to its default
/// when missing from the persisted file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EngineConfig {
    /// Years used for the per-decision "value if invested instead" figure.
    #[serde(default = "EngineConfig::default_investment_horizon_years")]
    pub investment_horizon_years: u32,
    /// Annual work hours (40h x 52wk) used to convert salary into an hourly wage.
    #[serde(default = "EngineConfig::default_annual_work_hours")]
    pub annual_work_hours: f64,
    /// Delays offered when the user is unsure about a purchase.
    #[serde(default = "EngineConfig::default_reminder_delays_hours")]
    pub reminder_delays_hours: Vec<u32>,
    #[serde(default = "EngineConfig::default_log_filter")]
    pub log_filter: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            investment_horizon_years: Self::default_investment_horizon_years(),
            annual_work_hours: Self::default_annual_work_hours(),
            reminder_delays_hours: Self::default_reminder_delays_hours(),
            log_filter: Self::default_log_filter(),
        }
    }
}

impl EngineConfig {
    pub fn default_investment_horizon_years() -> u32 {
        5
    }

    pub fn default_annual_work_hours() -> f64 {
        2080.0
    }

    pub fn default_reminder_delays_hours() -> Vec<u32> {
        vec![1, 24, 48]
    }

    pub fn default_log_filter() -> String {
        "buybye=info".into()
    }

    pub fn with_investment_horizon_years(mut self, years: u32) -> Self {
        self.investment_horizon_years = years;
        self
    }

    pub fn allows_reminder(&self, hours: u32) -> bool {
        self.reminder_delays_hours.contains(&hours)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.investment_horizon_years == 0 {
            return Err(ConfigError::Invalid(
                "investment_horizon_years must be at least 1".into(),
            ));
        }
        if !self.annual_work_hours.is_finite() || self.annual_work_hours <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "annual_work_hours must be positive (got {})",
                self.annual_work_hours
            )));
        }
        if self.reminder_delays_hours.is_empty() {
            return Err(ConfigError::Invalid(
                "reminder_delays_hours must not be empty".into(),
            ));
        }
        if self.reminder_delays_hours.contains(&0) {
            return Err(ConfigError::Invalid(
                "reminder_delays_hours must be positive".into(),
            ));
        }
        Ok(())
    }

    /// Directory holding the engine configuration when no base is supplied.
    pub fn resolve_default_base_dir() -> PathBuf {
        dirs::config_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."))
            .join("buybye")
    }
}
