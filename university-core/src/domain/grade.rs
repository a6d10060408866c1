use std::fmt;

use serde::Serialize;
use thiserror::Error;

use crate::domain::StudentId;

/// A numeric grade in the inclusive range `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Grade(f64);

/// Errors that can occur when assigning a grade.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GradeError {
    /// The value is not a number in `[0, 100]`.
    #[error("grade {0} is outside the range 0 to 100")]
    OutOfRange(f64),
    /// The student is not on the course roster.
    #[error("student {0} is not enrolled in this course")]
    NotEnrolled(StudentId),
}

impl Grade {
    /// The lowest possible grade.
    pub const MIN: f64 = 0.0;
    /// The highest possible grade.
    pub const MAX: f64 = 100.0;

    /// Creates a grade from a raw value.
    ///
    /// # Errors
    ///
    /// Returns [`GradeError::OutOfRange`] if the value is NaN or lies outside
    /// `[0, 100]`.
    pub fn new(value: f64) -> Result<Self, GradeError> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(GradeError::OutOfRange(value))
        }
    }

    /// The raw numeric value.
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Grade {
    type Error = GradeError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test_case(0.0; "lower bound")]
    #[test_case(100.0; "upper bound")]
    #[test_case(72.5; "fractional")]
    #[allow(clippy::float_cmp)]
    fn accepts_values_in_range(value: f64) {
        assert_eq!(Grade::new(value).unwrap().value(), value);
    }

    #[test_case(-1.0; "below range")]
    #[test_case(101.0; "above range")]
    #[test_case(-0.001; "just below")]
    #[test_case(100.001; "just above")]
    fn rejects_values_out_of_range(value: f64) {
        assert_eq!(Grade::new(value), Err(GradeError::OutOfRange(value)));
    }

    #[test]
    fn rejects_nan() {
        assert!(Grade::new(f64::NAN).is_err());
    }
}
