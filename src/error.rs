//! Calculator error types

use thiserror::Error;

/// Errors raised by the calculator
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;

impl CalcError {
    /// Error for a selector string that matches none of `valid`
    pub(crate) fn invalid_choice(kind: &str, value: &str, valid: &[&str]) -> Self {
        CalcError::InvalidInput(format!(
            "unrecognized {} '{}'. Use: {}",
            kind,
            value,
            valid.join(", ")
        ))
    }
}

/// Reject values that are NaN, infinite or not strictly positive
pub(crate) fn ensure_positive(field: &str, value: f64) -> CalcResult<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(CalcError::InvalidInput(format!(
            "{} must be a positive number, got {}",
            field, value
        )))
    }
}

/// Reject a computed value that overflowed
pub(crate) fn ensure_finite(quantity: &str, value: f64) -> CalcResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CalcError::InvalidInput(format!(
            "inputs are out of range: {} is not a finite number",
            quantity
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_choice_lists_options() {
        let err = CalcError::invalid_choice("goal", "bulk", &["lose", "maintain", "gain"]);
        assert_eq!(
            err.to_string(),
            "Invalid input: unrecognized goal 'bulk'. Use: lose, maintain, gain"
        );
    }

    #[test]
    fn test_ensure_positive() {
        assert_eq!(ensure_positive("weight", 70.0), Ok(70.0));
        assert!(ensure_positive("weight", 0.0).is_err());
        assert!(ensure_positive("weight", -1.0).is_err());
        assert!(ensure_positive("weight", f64::NAN).is_err());
        assert!(ensure_positive("weight", f64::INFINITY).is_err());
    }

    #[test]
    fn test_ensure_finite() {
        assert_eq!(ensure_finite("bmi", 22.86), Ok(22.86));
        let CalcError::InvalidInput(msg) = ensure_finite("bmi", f64::INFINITY).unwrap_err();
        assert!(msg.contains("bmi"));
    }
}
