//! Error types and result utilities for signal math operations.

use thiserror::Error;

/// Convenience type alias for results that may contain a [`DspError`].
pub type DspResult<T> = Result<T, DspError>;

/// Error types that can occur during window generation and buffer conversions.
///
/// Scalar conversions never return this type: non-positive logarithm input and
/// similar floating-point edge cases propagate as IEEE values (`-inf`, `NaN`).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DspError {
    /// An argument was outside the values an operation accepts.
    #[error("Invalid parameter: {0}")]
    Parameter(#[from] ParameterError),

    /// Two buffers that must agree in length do not.
    ///
    /// Happens when the left and right channels differ in length, when an output
    /// buffer is shorter than its input, or when window coefficients do not
    /// match the block they are applied to.
    #[error("Dimension mismatch in {context}: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Length the operation required.
        expected: usize,
        /// Length that was supplied.
        actual: usize,
        /// Operation or buffer the mismatch was detected in.
        context: String,
    },
}

impl DspError {
    /// Creates a [`DspError::DimensionMismatch`].
    pub fn dimension_mismatch(expected: usize, actual: usize, context: impl Into<String>) -> Self {
        DspError::DimensionMismatch {
            expected,
            actual,
            context: context.into(),
        }
    }
}

/// Describes which parameter was rejected and why.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParameterError {
    /// The value is not meaningful for the parameter.
    #[error("'{parameter}': {reason}")]
    InvalidValue {
        /// Parameter name.
        parameter: String,
        /// Why the value was rejected.
        reason: String,
    },

    /// The value falls outside an inclusive numeric range.
    #[error("'{parameter}' = {value} is outside [{min}, {max}]: {reason}")]
    OutOfRange {
        /// Parameter name.
        parameter: String,
        /// Supplied value, formatted.
        value: String,
        /// Lowest accepted value, formatted.
        min: String,
        /// Highest accepted value, formatted.
        max: String,
        /// Why the range applies.
        reason: String,
    },
}

impl ParameterError {
    /// Creates a [`ParameterError::InvalidValue`].
    pub fn invalid_value(parameter: impl Into<String>, reason: impl Into<String>) -> Self {
        ParameterError::InvalidValue {
            parameter: parameter.into(),
            reason: reason.into(),
        }
    }

    /// Creates a [`ParameterError::OutOfRange`].
    pub fn out_of_range(
        parameter: impl Into<String>,
        value: impl Into<String>,
        min: impl Into<String>,
        max: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        ParameterError::OutOfRange {
            parameter: parameter.into(),
            value: value.into(),
            min: min.into(),
            max: max.into(),
            reason: reason.into(),
        }
    }

    /// Name of the rejected parameter.
    pub fn parameter(&self) -> &str {
        match self {
            ParameterError::InvalidValue { parameter, .. }
            | ParameterError::OutOfRange { parameter, .. } => parameter,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parameter_error_display() {
        let err = ParameterError::out_of_range("len", "1", "2", "usize::MAX", "too short");
        assert_eq!(
            err.to_string(),
            "'len' = 1 is outside [2, usize::MAX]: too short"
        );
        assert_eq!(err.parameter(), "len");
    }

    #[test]
    fn test_parameter_converts_into_dsp_error() {
        let err: DspError = ParameterError::invalid_value("count", "must be > 0").into();
        assert!(matches!(err, DspError::Parameter(_)));
        assert_eq!(err.to_string(), "Invalid parameter: 'count': must be > 0");
    }

    #[test]
    fn test_dimension_mismatch_display() {
        let err = DspError::dimension_mismatch(8, 4, "decibels");
        assert_eq!(
            err.to_string(),
            "Dimension mismatch in decibels: expected 8, got 4"
        );
    }
}
