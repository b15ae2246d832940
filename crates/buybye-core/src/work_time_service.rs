//! Price to work-time conversion.

use buybye_domain::{WorkTime, MINUTES_PER_HOUR};

pub struct WorkTimeConverter;

impl WorkTimeConverter {
    /// Converts `price` into whole hours and rounded minutes at `hourly_rate`.
    ///
    /// A non-positive or non-finite rate yields [`WorkTime::ZERO`], as does a
    /// price that is not a finite non-negative number. Minutes that round up
    /// to 60 carry into the hour.
    pub fn convert(price: f64, hourly_rate: f64) -> WorkTime {
        if !(hourly_rate.is_finite() && hourly_rate > 0.0) || !(price.is_finite() && price >= 0.0)
        {
            return WorkTime::ZERO;
        }
        let total_hours = price / hourly_rate;
        if !total_hours.is_finite() {
            return WorkTime::ZERO;
        }
        let hours = total_hours.floor();
        let minutes = ((total_hours - hours) * f64::from(MINUTES_PER_HOUR)).round() as u32;
        WorkTime::new(hours as u64, minutes)
    }
}
