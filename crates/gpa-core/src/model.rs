//! Core data model types for gpa.
//!
//! Field names on the persisted types follow the storage layout used by the
//! history slots (`hasExisting`, `existingGPA`, `termGPA`, ...), so records
//! written by earlier front ends load unchanged.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A grade exactly as the user supplied it.
///
/// Free text is interpreted by [`crate::grade::convert_grade`]; numbers skip
/// the letter-code lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GradeInput {
    Text(String),
    Number(f64),
}

impl fmt::Display for GradeInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GradeInput::Text(s) => write!(f, "{s}"),
            GradeInput::Number(n) => write!(f, "{n}"),
        }
    }
}

impl From<&str> for GradeInput {
    fn from(value: &str) -> Self {
        GradeInput::Text(value.to_string())
    }
}

impl From<String> for GradeInput {
    fn from(value: String) -> Self {
        GradeInput::Text(value)
    }
}

impl From<f64> for GradeInput {
    fn from(value: f64) -> Self {
        GradeInput::Number(value)
    }
}

/// A single course row: a grade and its credit weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub grade: GradeInput,
    pub credit: u32,
}

impl Course {
    pub fn new(grade: impl Into<GradeInput>, credit: u32) -> Self {
        Self {
            grade: grade.into(),
            credit,
        }
    }
}

/// Term and cumulative GPA for one calculation.
///
/// Values are unrounded; use [`GpaResult::rounded`] for display.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GpaResult {
    #[serde(rename = "termGPA")]
    pub term_gpa: f64,
    #[serde(rename = "cumulativeGPA")]
    pub cumulative_gpa: f64,
}

impl GpaResult {
    /// Round both values to `decimals` places.
    pub fn rounded(&self, decimals: u32) -> Self {
        Self {
            term_gpa: round_to(self.term_gpa, decimals),
            cumulative_gpa: round_to(self.cumulative_gpa, decimals),
        }
    }
}

fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// A calculation ready to be saved; the store assigns `id` and `timestamp`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewCalculation {
    #[serde(rename = "hasExisting")]
    pub has_existing: bool,
    #[serde(
        rename = "existingGPA",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub existing_gpa: Option<f64>,
    #[serde(
        rename = "existingCredits",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub existing_credits: Option<u32>,
    pub courses: Vec<Course>,
    pub results: GpaResult,
    /// Optional display label such as "Fall 2024".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// A calculation as stored in the history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedCalculation {
    pub id: String,
    /// Creation time in milliseconds since the Unix epoch.
    pub timestamp: i64,
    #[serde(flatten)]
    pub calculation: NewCalculation,
}

impl SavedCalculation {
    pub fn results(&self) -> &GpaResult {
        &self.calculation.results
    }

    pub fn label(&self) -> Option<&str> {
        self.calculation.label.as_deref()
    }
}

/// Snapshot of the last submitted input form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormData {
    #[serde(rename = "hasExisting")]
    pub has_existing: bool,
    /// Prior GPA as typed; empty when not given.
    #[serde(default)]
    pub existing_gpa: String,
    #[serde(default)]
    pub existing_credits: u32,
    pub courses: Vec<Course>,
}

impl FormData {
    /// Resolve the prior GPA and credits the form describes.
    ///
    /// The prior GPA is only present when `has_existing` is set and the text
    /// parses as a number; prior credits are zero unless `has_existing` is set.
    pub fn existing_record(&self) -> (Option<f64>, u32) {
        if !self.has_existing {
            return (None, 0);
        }
        let gpa = self.existing_gpa.trim();
        let gpa = if gpa.is_empty() {
            None
        } else {
            gpa.parse::<f64>().ok().filter(|v| v.is_finite())
        };
        (gpa, self.existing_credits)
    }
}

impl Default for FormData {
    fn default() -> Self {
        Self {
            has_existing: false,
            existing_gpa: String::new(),
            existing_credits: 0,
            courses: vec![Course::new("AA", 3)],
        }
    }
}

/// Free-form user settings.
pub type Settings = serde_json::Map<String, serde_json::Value>;
