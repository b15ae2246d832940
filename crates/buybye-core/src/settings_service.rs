//! Edits to income settings that keep salary and hourly rate consistent.

use buybye_domain::{IncomeMode, UserSettings};
use tracing::debug;

use crate::{
    rate_service::DEFAULT_ANNUAL_WORK_HOURS,
    validation::{non_negative, rounded_to},
    CoreError,
};

#[derive(Debug, Clone, Copy)]
pub struct SettingsService {
    annual_work_hours: f64,
}

impl Default for SettingsService {
    fn default() -> Self {
        Self::new(DEFAULT_ANNUAL_WORK_HOURS)
    }
}

impl SettingsService {
    pub fn new(annual_work_hours: f64) -> Self {
        Self { annual_work_hours }
    }

    /// Sets the yearly salary and derives the hourly rate, rounded to cents.
    pub fn set_yearly_salary(&self, settings: &mut UserSettings, salary: f64) -> Result<(), CoreError> {
        let salary = non_negative(salary, "yearly salary")?;
        settings.yearly_salary = salary;
        settings.hourly_rate = if self.annual_work_hours > 0.0 {
            rounded_to(salary / self.annual_work_hours, 2)
        } else {
            0.0
        };
        debug!(salary, hourly_rate = settings.hourly_rate, "salary updated");
        Ok(())
    }

    /// Sets the hourly rate and derives the yearly salary, rounded to whole units.
    pub fn set_hourly_rate(&self, settings: &mut UserSettings, rate: f64) -> Result<(), CoreError> {
        let rate = non_negative(rate, "hourly rate")?;
        settings.hourly_rate = rate;
        settings.yearly_salary = (rate * self.annual_work_hours).round();
        debug!(rate, yearly_salary = settings.yearly_salary, "hourly rate updated");
        Ok(())
    }

    /// Switches the source of truth without touching either amount.
    pub fn set_income_mode(&self, settings: &mut UserSettings, mode: IncomeMode) {
        settings.income_mode = mode;
    }

    pub fn set_investment_return_rate(
        &self,
        settings: &mut UserSettings,
        percent: f64,
    ) -> Result<(), CoreError> {
        settings.investment_return_rate = non_negative(percent, "investment return rate")?;
        Ok(())
    }

    /// Checks settings coming from the settings store before they reach projections.
    pub fn validate(&self, settings: &UserSettings) -> Result<(), CoreError> {
        non_negative(settings.yearly_salary, "yearly salary")?;
        non_negative(settings.hourly_rate, "hourly rate")?;
        non_negative(settings.investment_return_rate, "investment return rate")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn salary_edit_derives_hourly_rate() {
        let mut settings = UserSettings::default();
        SettingsService::default()
            .set_yearly_salary(&mut settings, 60_000.0)
            .unwrap();
        assert_eq!(settings.yearly_salary, 60_000.0);
        assert_eq!(settings.hourly_rate, 28.85);
    }

    #[test]
    fn hourly_edit_derives_salary() {
        let mut settings = UserSettings::default();
        SettingsService::default()
            .set_hourly_rate(&mut settings, 30.5)
            .unwrap();
        assert_eq!(settings.yearly_salary, 63_440.0);
        assert_eq!(settings.hourly_rate, 30.5);
    }

    #[test]
    fn mode_switch_keeps_amounts() {
        let mut settings = UserSettings::default();
        let service = SettingsService::default();
        service.set_income_mode(&mut settings, IncomeMode::Hourly);
        assert_eq!(settings.income_mode, IncomeMode::Hourly);
        assert_eq!(settings.yearly_salary, 52_000.0);
        assert_eq!(settings.hourly_rate, 25.0);
    }

    #[test]
    fn negative_values_are_rejected_and_leave_settings_alone() {
        let mut settings = UserSettings::default();
        let service = SettingsService::default();
        assert!(service.set_yearly_salary(&mut settings, -1.0).is_err());
        assert!(service.set_hourly_rate(&mut settings, f64::NAN).is_err());
        assert!(service.set_investment_return_rate(&mut settings, -3.0).is_err());
        assert_eq!(settings, UserSettings::default());
    }
}
