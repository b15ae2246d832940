//! Hourly wage resolution from income settings.

use buybye_domain::{IncomeMode, UserSettings};

/// 40 hours a week for 52 weeks.
pub const DEFAULT_ANNUAL_WORK_HOURS: f64 = 2080.0;

/// Derives the hourly wage that work-time conversions divide by.
#[derive(Debug, Clone, Copy)]
pub struct RateResolver {
    annual_work_hours: f64,
}

impl Default for RateResolver {
    fn default() -> Self {
        Self::new(DEFAULT_ANNUAL_WORK_HOURS)
    }
}

impl RateResolver {
    pub fn new(annual_work_hours: f64) -> Self {
        Self { annual_work_hours }
    }

    pub fn annual_work_hours(&self) -> f64 {
        self.annual_work_hours
    }

    /// Returns the wage for the active income mode. The result may be zero or
    /// negative for degenerate settings; [`crate::WorkTimeConverter`] guards that case.
    pub fn hourly_rate(&self, settings: &UserSettings) -> f64 {
        match settings.income_mode {
            IncomeMode::Hourly => settings.hourly_rate,
            IncomeMode::Salary if self.annual_work_hours > 0.0 => {
                settings.yearly_salary / self.annual_work_hours
            }
            IncomeMode::Salary => 0.0,
        }
    }
}
