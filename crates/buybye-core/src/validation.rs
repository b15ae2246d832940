use crate::CoreError;

/// Rejects negative and non-finite amounts instead of clamping them.
pub(crate) fn non_negative(value: f64, field: &str) -> Result<f64, CoreError> {
    if !value.is_finite() {
        return Err(CoreError::InvalidInput(format!(
            "{field} must be a finite number (got {value})"
        )));
    }
    if value < 0.0 {
        return Err(CoreError::InvalidInput(format!(
            "{field} must not be negative (got {value})"
        )));
    }
    Ok(value)
}

pub(crate) fn positive(value: f64, field: &str) -> Result<f64, CoreError> {
    let value = non_negative(value, field)?;
    if value == 0.0 {
        return Err(CoreError::InvalidInput(format!(
            "{field} must be greater than zero"
        )));
    }
    Ok(value)
}

pub(crate) fn rounded_to(value: f64, digits: i32) -> f64 {
    let factor = 10_f64.powi(digits);
    (value * factor).round() / factor
}
