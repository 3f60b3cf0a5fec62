//! gpa-core — grade conversion, GPA calculation and calculation history.
//!
//! This crate holds everything with real semantics: the letter/numeric grade
//! table, the credit-weighted term and cumulative GPA, and the bounded
//! history store that sits behind a pluggable key-value port.

pub mod engine;
pub mod error;
pub mod grade;
pub mod model;
pub mod store;
pub mod trend;

pub use engine::{calculate_both_gpa, calculate_cumulative_gpa, calculate_term_gpa};
pub use error::{CalculationError, GradeError, StorageError};
pub use grade::{convert_grade, Grade, LetterGrade};
pub use model::{
    Course, FormData, GpaResult, GradeInput, NewCalculation, SavedCalculation, Settings,
};
pub use store::{CalculationStore, KeyValueStorage, MemoryStorage, MAX_HISTORY};
