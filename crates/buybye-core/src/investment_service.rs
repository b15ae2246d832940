//! Future-value projections for a one-off amount and for a contribution stream.

use tracing::debug;

use crate::{validation::non_negative, CoreError};

/// Default horizon of the per-decision "value if invested instead" figure.
pub const DEFAULT_INVESTMENT_HORIZON_YEARS: u32 = 5;

#[derive(Debug, Clone, Copy)]
pub struct InvestmentProjector {
    horizon_years: u32,
}

impl Default for InvestmentProjector {
    fn default() -> Self {
        Self::new(DEFAULT_INVESTMENT_HORIZON_YEARS)
    }
}

impl InvestmentProjector {
    pub fn new(horizon_years: u32) -> Self {
        Self { horizon_years }
    }

    pub fn horizon_years(&self) -> u32 {
        self.horizon_years
    }

    /// Value of `amount` after compounding annually for the configured horizon.
    pub fn value_if_invested(
        &self,
        amount: f64,
        annual_rate_percent: f64,
    ) -> Result<f64, CoreError> {
        Self::lump_sum(amount, annual_rate_percent, self.horizon_years)
    }

    /// `amount × (1 + rate/100)^years`.
    pub fn lump_sum(amount: f64, annual_rate_percent: f64, years: u32) -> Result<f64, CoreError> {
        let amount = non_negative(amount, "amount")?;
        let rate = non_negative(annual_rate_percent, "annual return rate")? / 100.0;
        let value = amount * (1.0 + rate).powf(f64::from(years));
        debug!(amount, rate, years, value, "lump-sum projection");
        finite(value)
    }

    /// Annuity-due future value of `annual_contribution` paid at the start of
    /// each year for `years` years.
    pub fn contribution_stream(
        annual_contribution: f64,
        annual_rate_percent: f64,
        years: u32,
    ) -> Result<f64, CoreError> {
        let contribution = non_negative(annual_contribution, "annual contribution")?;
        let rate = non_negative(annual_rate_percent, "annual return rate")? / 100.0;
        if contribution == 0.0 || years == 0 {
            return Ok(0.0);
        }
        let value = if rate == 0.0 {
            contribution * f64::from(years)
        } else {
            contribution * ((1.0 + rate).powf(f64::from(years)) - 1.0) / rate * (1.0 + rate)
        };
        debug!(contribution, rate, years, value, "contribution-stream projection");
        finite(value)
    }
}

fn finite(value: f64) -> Result<f64, CoreError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CoreError::InvalidInput(
            "projection overflowed the representable range".into(),
        ))
    }
}
