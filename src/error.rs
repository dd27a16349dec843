//! Error taxonomy shared by the engine and its foreign-function boundary.

use std::error::Error;
use std::fmt;

/// Failure modes visible at the calculation boundary.
///
/// Every failure aborts the whole computation; there are no partial results.
/// The numeric codes returned over FFI keep the original library ABI:
/// 0 success, -1 null pointer, -2 invalid UTF-8, -3 parse failure,
/// -4 serialization failure, -5 output conversion, -6 buffer too small.
/// Validation failures introduced by presence tracking use -7 and -8.
#[derive(Debug, Clone, PartialEq)]
pub enum CoachError {
    /// A required input or output handle was not provided.
    NullPointer,
    /// Input text is not valid UTF-8.
    InvalidEncoding,
    /// Input JSON could not be parsed into shot fields.
    MalformedPayload(String),
    /// A mandatory field (ball speed, vertical launch angle) was absent.
    MissingRequiredField(&'static str),
    /// A supplied value is non-finite or outside its allowed range.
    InvalidValue { field: &'static str, value: f64 },
    /// The result could not be rendered to JSON text.
    SerializationFailure(String),
    /// Rendered output exceeds the caller-provided buffer capacity.
    BufferTooSmall { required: usize, capacity: usize },
}

impl fmt::Display for CoachError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CoachError::NullPointer => write!(f, "input or output pointer is null"),
            CoachError::InvalidEncoding => write!(f, "input string is not valid UTF-8"),
            CoachError::MalformedPayload(detail) => write!(f, "JSON parsing failed: {detail}"),
            CoachError::MissingRequiredField(field) => {
                write!(f, "required field missing: {field}")
            }
            CoachError::InvalidValue { field, value } => {
                write!(f, "invalid value for {field}: {value}")
            }
            CoachError::SerializationFailure(detail) => {
                write!(f, "JSON serialization failed: {detail}")
            }
            CoachError::BufferTooSmall { required, capacity } => {
                write!(
                    f,
                    "output buffer too small: need {required} bytes, have {capacity}"
                )
            }
        }
    }
}

impl Error for CoachError {}

impl CoachError {
    /// Status code reported through the C boundary.
    pub fn status_code(&self) -> i32 {
        match self {
            CoachError::NullPointer => -1,
            CoachError::InvalidEncoding => -2,
            CoachError::MalformedPayload(_) => -3,
            CoachError::SerializationFailure(_) => -4,
            CoachError::BufferTooSmall { .. } => -6,
            CoachError::MissingRequiredField(_) => -7,
            CoachError::InvalidValue { .. } => -8,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes_match_original_abi() {
        assert_eq!(CoachError::NullPointer.status_code(), -1);
        assert_eq!(CoachError::InvalidEncoding.status_code(), -2);
        assert_eq!(
            CoachError::MalformedPayload("x".into()).status_code(),
            -3
        );
        assert_eq!(
            CoachError::SerializationFailure("x".into()).status_code(),
            -4
        );
        assert_eq!(
            CoachError::BufferTooSmall {
                required: 100,
                capacity: 10
            }
            .status_code(),
            -6
        );
    }

    #[test]
    fn test_display_names_the_field() {
        let err = CoachError::MissingRequiredField("ball_speed_meters_per_second");
        assert!(err.to_string().contains("ball_speed_meters_per_second"));

        let err = CoachError::InvalidValue {
            field: "total_spin_rpm",
            value: -1.0,
        };
        assert!(err.to_string().contains("total_spin_rpm"));
    }
}
