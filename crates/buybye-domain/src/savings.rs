//! Running savings totals and work-time quantities.

use std::{fmt, ops::Add};

use serde::{Deserialize, Serialize};

pub const MINUTES_PER_HOUR: u32 = 60;

/// Whole hours plus leftover minutes; `minutes` always stays below 60.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct WorkTime {
    pub hours: u64,
    pub minutes: u32,
}

impl WorkTime {
    pub const ZERO: WorkTime = WorkTime {
        hours: 0,
        minutes: 0,
    };

    /// Builds a work time, carrying whole hours out of `minutes`.
    pub fn new(hours: u64, minutes: u32) -> Self {
        Self {
            hours: hours + u64::from(minutes / MINUTES_PER_HOUR),
            minutes: minutes % MINUTES_PER_HOUR,
        }
    }

    pub fn total_minutes(&self) -> u64 {
        self.hours * u64::from(MINUTES_PER_HOUR) + u64::from(self.minutes)
    }

    pub fn is_zero(&self) -> bool {
        self.hours == 0 && self.minutes == 0
    }
}

impl Add for WorkTime {
    type Output = WorkTime;

    fn add(self, rhs: WorkTime) -> WorkTime {
        WorkTime::new(self.hours + rhs.hours, self.minutes + rhs.minutes)
    }
}

impl fmt::Display for WorkTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let plural = |n: u64| if n == 1 { "" } else { "s" };
        match (self.hours, self.minutes) {
            (0, m) => write!(f, "{m} minute{}", plural(u64::from(m))),
            (h, 0) => write!(f, "{h} hour{}", plural(h)),
            (h, m) => write!(
                f,
                "{h} hour{}, {m} minute{}",
                plural(h),
                plural(u64::from(m))
            ),
        }
    }
}

/// Process-wide totals across every credited decision.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct SavingsAggregate {
    pub money_saved: f64,
    pub work_time_saved: WorkTime,
    /// Sum of per-decision future values; not compounded further.
    pub investment_potential: f64,
}

impl SavingsAggregate {
    pub fn is_empty(&self) -> bool {
        self.money_saved == 0.0 && self.work_time_saved.is_zero() && self.investment_potential == 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adding_work_time_carries_minutes_into_hours() {
        let total = WorkTime::new(1, 45) + WorkTime::new(2, 30);
        assert_eq!(total, WorkTime::new(4, 15));
        assert_eq!(total.minutes, 15);
    }

    #[test]
    fn constructor_normalizes_overflowing_minutes() {
        let time = WorkTime::new(0, 125);
        assert_eq!(time.hours, 2);
        assert_eq!(time.minutes, 5);
        assert_eq!(time.total_minutes(), 125);
    }

    #[test]
    fn display_reads_naturally() {
        assert_eq!(WorkTime::new(1, 7).to_string(), "1 hour, 7 minutes");
        assert_eq!(WorkTime::new(2, 0).to_string(), "2 hours");
        assert_eq!(WorkTime::ZERO.to_string(), "0 minutes");
        assert_eq!(WorkTime::new(0, 1).to_string(), "1 minute");
    }

    #[test]
    fn aggregate_serializes_with_camel_case_keys() {
        let json = serde_json::to_value(SavingsAggregate::default()).unwrap();
        assert_eq!(json["moneySaved"], 0.0);
        assert_eq!(json["workTimeSaved"]["hours"], 0);
    }
}
