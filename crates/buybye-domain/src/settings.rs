//! User income and projection preferences.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Which income field is the source of truth for the hourly wage.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum IncomeMode {
    #[default]
    Salary,
    Hourly,
}

impl fmt::Display for IncomeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            IncomeMode::Salary => "salary",
            IncomeMode::Hourly => "hourly",
        };
        f.write_str(label)
    }
}

/// Income, return-rate and retirement preferences supplied by the settings store.
///
/// `yearly_salary` and `hourly_rate` are kept consistent with each other by
/// the settings service whenever either one is edited; `income_mode` decides
/// which of them the hourly wage is resolved from.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserSettings {
    /// Display-only; never used in arithmetic.
    pub currency: String,
    pub income_mode: IncomeMode,
    pub yearly_salary: f64,
    pub hourly_rate: f64,
    /// Percent per year, e.g. `10.0` for 10 %.
    pub investment_return_rate: f64,
    pub retirement_age: u32,
    pub birthday: NaiveDate,
}

impl UserSettings {
    pub const DEFAULT_CURRENCY: &'static str = "$";

    pub fn default_birthday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2004, 1, 1).unwrap_or_default()
    }
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            currency: Self::DEFAULT_CURRENCY.into(),
            income_mode: IncomeMode::Salary,
            yearly_salary: 52_000.0,
            hourly_rate: 25.0,
            investment_return_rate: 10.0,
            retirement_age: 65,
            birthday: Self::default_birthday(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings_use_camel_case_on_the_wire() {
        let json = serde_json::to_value(UserSettings::default()).unwrap();
        assert_eq!(json["incomeMode"], "salary");
        assert_eq!(json["yearlySalary"], 52_000.0);
        assert_eq!(json["birthday"], "2004-01-01");
    }
}
