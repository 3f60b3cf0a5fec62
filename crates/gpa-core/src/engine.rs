//! Credit-weighted GPA calculation.
//!
//! Term GPA averages the grade points of the given courses weighted by their
//! credits. Cumulative GPA blends a prior GPA/credit total into that average.
//! Zero total credits yields 0.0 rather than an error.

use crate::error::CalculationError;
use crate::grade::convert_grade;
use crate::model::{Course, GpaResult};

/// Summed grade points and credits over a course list.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct Totals {
    points: f64,
    credits: u64,
}

impl Totals {
    fn average(&self) -> f64 {
        if self.credits == 0 {
            0.0
        } else {
            self.points / self.credits as f64
        }
    }
}

/// Accumulate courses in input order, stopping at the first bad grade.
fn accumulate(courses: &[Course]) -> Result<Totals, CalculationError> {
    let mut totals = Totals::default();
    for (index, course) in courses.iter().enumerate() {
        let points = convert_grade(&course.grade)
            .map_err(|source| CalculationError::InvalidCourse { index, source })?;
        totals.points += points * f64::from(course.credit);
        totals.credits += u64::from(course.credit);
    }
    Ok(totals)
}

/// GPA of `courses` alone. An empty list gives 0.0.
pub fn calculate_term_gpa(courses: &[Course]) -> Result<f64, CalculationError> {
    if courses.is_empty() {
        return Ok(0.0);
    }
    Ok(accumulate(courses)?.average())
}

/// GPA after adding `new_courses` to a prior record.
///
/// `existing_gpa` is taken as given, it is not range-checked.
pub fn calculate_cumulative_gpa(
    existing_gpa: f64,
    existing_credits: u32,
    new_courses: &[Course],
) -> Result<f64, CalculationError> {
    let new = accumulate(new_courses)?;
    let combined = Totals {
        points: existing_gpa * f64::from(existing_credits) + new.points,
        credits: u64::from(existing_credits) + new.credits,
    };
    Ok(combined.average())
}

/// Term and cumulative GPA in one pass.
///
/// Without a prior GPA, or with zero prior credits, the cumulative GPA is the
/// term GPA.
pub fn calculate_both_gpa(
    existing_gpa: Option<f64>,
    existing_credits: u32,
    new_courses: &[Course],
) -> Result<GpaResult, CalculationError> {
    let term_gpa = calculate_term_gpa(new_courses)?;

    let cumulative_gpa = match existing_gpa {
        Some(gpa) if existing_credits > 0 => {
            calculate_cumulative_gpa(gpa, existing_credits, new_courses)?
        }
        _ => term_gpa,
    };

    tracing::debug!(
        courses = new_courses.len(),
        term_gpa,
        cumulative_gpa,
        "calculated gpa"
    );

    Ok(GpaResult {
        term_gpa,
        cumulative_gpa,
    })
}
