//! Error types for grade conversion, GPA calculation and storage.
//!
//! Calculation errors abort a single calculation attempt and are meant to be
//! shown to the user. Storage errors only surface from write paths; reads
//! degrade to empty results inside [`crate::store::CalculationStore`].

use thiserror::Error;

/// Errors produced when turning a raw grade into grade points.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GradeError {
    /// The input is neither a known letter code nor a number.
    #[error("invalid grade input: {input}")]
    InvalidGradeFormat { input: String },

    /// The input parsed as a number outside 0.0..=4.0.
    #[error("grade must be between 0.0 and 4.0: {value}")]
    OutOfRangeGrade { value: f64 },
}

/// Errors produced by the GPA engine.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalculationError {
    /// A course carried a grade that could not be converted.
    #[error("invalid grade in course #{}", .index + 1)]
    InvalidCourse {
        /// Zero-based position of the course in the input.
        index: usize,
        #[source]
        source: GradeError,
    },
}

impl CalculationError {
    /// The grade error that caused the calculation to fail.
    pub fn grade_error(&self) -> &GradeError {
        match self {
            CalculationError::InvalidCourse { source, .. } => source,
        }
    }

    /// Zero-based index of the offending course.
    pub fn course_index(&self) -> usize {
        match self {
            CalculationError::InvalidCourse { index, .. } => *index,
        }
    }
}

/// Errors raised by a [`crate::store::KeyValueStorage`] backend.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The backend could not read or write its medium.
    #[error("storage io error: {0}")]
    Io(#[from] std::io::Error),

    /// A value could not be encoded or decoded.
    #[error("storage serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The backend refused the operation.
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn calculation_error_reports_one_based_position() {
        let err = CalculationError::InvalidCourse {
            index: 2,
            source: GradeError::OutOfRangeGrade { value: 5.0 },
        };
        assert_eq!(err.to_string(), "invalid grade in course #3");
        assert_eq!(
            std::error::Error::source(&err).map(|e| e.to_string()),
            Some("grade must be between 0.0 and 4.0: 5".to_string())
        );
        assert_eq!(err.course_index(), 2);
        assert!(matches!(
            err.grade_error(),
            GradeError::OutOfRangeGrade { .. }
        ));
    }

    #[test]
    fn invalid_format_keeps_original_input() {
        let err = GradeError::InvalidGradeFormat {
            input: " xyz ".into(),
        };
        assert_eq!(err.to_string(), "invalid grade input:  xyz ");
    }
}
