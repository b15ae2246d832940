//! Long-horizon retirement projection from the current savings pace.

use buybye_domain::UserSettings;
use chrono::{Datelike, NaiveDate};
use tracing::debug;

use crate::{investment_service::InvestmentProjector, CoreError};

pub const MONTHS_PER_YEAR: f64 = 12.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RetirementProjection {
    /// Whole-year age: current year minus birth year.
    pub current_age: i32,
    pub years_to_retirement: u32,
    pub monthly_contribution: f64,
    pub projected_value: f64,
}

pub struct RetirementProjector;

impl RetirementProjector {
    /// Projects the nominal value at retirement age, treating `total_saved` as
    /// one year of contributions paid in twelve equal monthly parts.
    pub fn project(
        total_saved: f64,
        settings: &UserSettings,
        today: NaiveDate,
    ) -> Result<RetirementProjection, CoreError> {
        if total_saved.is_nan() || total_saved.is_infinite() {
            return Err(CoreError::InvalidInput(format!(
                "total saved must be a finite number (got {total_saved})"
            )));
        }
        let current_age = Self::age_on(settings.birthday, today);
        let years_to_retirement = Self::years_until(settings.retirement_age, current_age);
        let monthly_contribution = total_saved / MONTHS_PER_YEAR;

        let projected_value = if monthly_contribution > 0.0 {
            InvestmentProjector::contribution_stream(
                monthly_contribution * MONTHS_PER_YEAR,
                settings.investment_return_rate,
                years_to_retirement,
            )?
        } else {
            0.0
        };

        debug!(
            current_age,
            years_to_retirement, monthly_contribution, projected_value, "retirement projected"
        );
        Ok(RetirementProjection {
            current_age,
            years_to_retirement,
            monthly_contribution: monthly_contribution.max(0.0),
            projected_value,
        })
    }

    pub fn age_on(birthday: NaiveDate, today: NaiveDate) -> i32 {
        today.year() - birthday.year()
    }

    pub fn years_until(retirement_age: u32, current_age: i32) -> u32 {
        let remaining = i64::from(retirement_age) - i64::from(current_age);
        u32::try_from(remaining.max(0)).unwrap_or(u32::MAX)
    }
}
