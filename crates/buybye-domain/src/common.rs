//! Shared enums for savings primitives.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of years over which a goal target is evenly saved.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(try_from = "u8", into = "u8")]
pub enum Horizon {
    #[default]
    OneYear,
    TwoYears,
    ThreeYears,
}

impl Horizon {
    pub const ALL: [Horizon; 3] = [Horizon::OneYear, Horizon::TwoYears, Horizon::ThreeYears];

    pub fn years(self) -> u8 {
        match self {
            Horizon::OneYear => 1,
            Horizon::TwoYears => 2,
            Horizon::ThreeYears => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Horizon::OneYear => "1-Year Goal",
            Horizon::TwoYears => "2-Year Goal",
            Horizon::ThreeYears => "3-Year Goal",
        }
    }
}

impl TryFrom<u8> for Horizon {
    type Error = HorizonError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Horizon::OneYear),
            2 => Ok(Horizon::TwoYears),
            3 => Ok(Horizon::ThreeYears),
            other => Err(HorizonError(other)),
        }
    }
}

impl From<Horizon> for u8 {
    fn from(value: Horizon) -> Self {
        value.years()
    }
}

impl fmt::Display for Horizon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Raised when a horizon outside 1..=3 years is requested.
pub struct HorizonError(pub u8);

impl fmt::Display for HorizonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "horizon must be 1, 2 or 3 years (got {})", self.0)
    }
}

impl std::error::Error for HorizonError {}

/// Delay before the user is reminded about an item they were unsure about.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct ReminderDelay(pub u32);

impl ReminderDelay {
    pub fn hours(self) -> u32 {
        self.0
    }
}

impl Default for ReminderDelay {
    fn default() -> Self {
        Self(24)
    }
}

impl fmt::Display for ReminderDelay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            1 => f.write_str("1 hour"),
            n => write!(f, "{n} hours"),
        }
    }
}
