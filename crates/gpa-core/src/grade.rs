//! Grade conversion.
//!
//! Maps letter codes (`AA` .. `FF`) and numeric grades onto the 0.0..=4.0
//! grade-point scale. Letter codes always win over numeric parsing.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GradeError;
use crate::model::GradeInput;

/// Lowest valid grade point.
pub const MIN_POINTS: f64 = 0.0;
/// Highest valid grade point.
pub const MAX_POINTS: f64 = 4.0;

/// The eight letter codes of the grading table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LetterGrade {
    AA,
    BA,
    BB,
    CB,
    CC,
    DC,
    DD,
    FF,
}

impl LetterGrade {
    /// Every letter grade, best first.
    pub const ALL: [LetterGrade; 8] = [
        LetterGrade::AA,
        LetterGrade::BA,
        LetterGrade::BB,
        LetterGrade::CB,
        LetterGrade::CC,
        LetterGrade::DC,
        LetterGrade::DD,
        LetterGrade::FF,
    ];

    /// Grade points for this letter.
    pub fn points(self) -> f64 {
        match self {
            LetterGrade::AA => 4.0,
            LetterGrade::BA => 3.5,
            LetterGrade::BB => 3.0,
            LetterGrade::CB => 2.5,
            LetterGrade::CC => 2.0,
            LetterGrade::DC => 1.5,
            LetterGrade::DD => 1.0,
            LetterGrade::FF => 0.0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LetterGrade::AA => "AA",
            LetterGrade::BA => "BA",
            LetterGrade::BB => "BB",
            LetterGrade::CB => "CB",
            LetterGrade::CC => "CC",
            LetterGrade::DC => "DC",
            LetterGrade::DD => "DD",
            LetterGrade::FF => "FF",
        }
    }
}

impl fmt::Display for LetterGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LetterGrade {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "AA" => Ok(LetterGrade::AA),
            "BA" => Ok(LetterGrade::BA),
            "BB" => Ok(LetterGrade::BB),
            "CB" => Ok(LetterGrade::CB),
            "CC" => Ok(LetterGrade::CC),
            "DC" => Ok(LetterGrade::DC),
            "DD" => Ok(LetterGrade::DD),
            "FF" => Ok(LetterGrade::FF),
            other => Err(format!("unknown letter grade: {other}")),
        }
    }
}

/// A grade after interpretation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Grade {
    Letter(LetterGrade),
    Numeric(f64),
}

impl Grade {
    /// Interpret a raw grade.
    ///
    /// Text is trimmed and upper-cased and looked up as a letter code first;
    /// anything else must parse as a finite number within 0.0..=4.0.
    pub fn parse(input: &GradeInput) -> Result<Self, GradeError> {
        let value = match input {
            GradeInput::Text(raw) => {
                if let Ok(letter) = raw.parse::<LetterGrade>() {
                    return Ok(Grade::Letter(letter));
                }
                match raw.trim().parse::<f64>() {
                    Ok(v) if v.is_finite() => v,
                    _ => {
                        return Err(GradeError::InvalidGradeFormat { input: raw.clone() });
                    }
                }
            }
            GradeInput::Number(n) => {
                if !n.is_finite() {
                    return Err(GradeError::InvalidGradeFormat {
                        input: n.to_string(),
                    });
                }
                *n
            }
        };

        if !(MIN_POINTS..=MAX_POINTS).contains(&value) {
            return Err(GradeError::OutOfRangeGrade { value });
        }
        Ok(Grade::Numeric(value))
    }

    /// Grade points on the 0.0..=4.0 scale.
    pub fn points(&self) -> f64 {
        match self {
            Grade::Letter(letter) => letter.points(),
            Grade::Numeric(value) => *value,
        }
    }
}

/// Convert a raw grade into grade points.
pub fn convert_grade(input: &GradeInput) -> Result<f64, GradeError> {
    Grade::parse(input).map(|g| g.points())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> GradeInput {
        GradeInput::Text(s.into())
    }

    #[test]
    fn letter_table() {
        let expected = [4.0, 3.5, 3.0, 2.5, 2.0, 1.5, 1.0, 0.0];
        for (letter, points) in LetterGrade::ALL.iter().zip(expected) {
            assert_eq!(convert_grade(&text(letter.as_str())).unwrap(), points);
        }
    }

    #[test]
    fn letters_ignore_case_and_whitespace() {
        assert_eq!(convert_grade(&text("  aa ")).unwrap(), 4.0);
        assert_eq!(convert_grade(&text("\tcB\n")).unwrap(), 2.5);
        assert_eq!(convert_grade(&text("ff")).unwrap(), 0.0);
        assert_eq!(
            Grade::parse(&text("Dc")).unwrap(),
            Grade::Letter(LetterGrade::DC)
        );
    }

    #[test]
    fn numeric_text_in_range_passes_through() {
        assert_eq!(convert_grade(&text("3.7")).unwrap(), 3.7);
        assert_eq!(convert_grade(&text(" 0 ")).unwrap(), 0.0);
        assert_eq!(convert_grade(&text("4.0")).unwrap(), 4.0);
        assert_eq!(Grade::parse(&text("2.25")).unwrap(), Grade::Numeric(2.25));
    }

    #[test]
    fn numbers_in_range_pass_through() {
        for n in [0.0, 0.1, 1.75, 3.33, 4.0] {
            assert_eq!(convert_grade(&GradeInput::Number(n)).unwrap(), n);
        }
    }

    #[test]
    fn out_of_range_numbers_fail() {
        for n in [-0.01, -3.0, 4.01, 10.0] {
            assert_eq!(
                convert_grade(&GradeInput::Number(n)),
                Err(GradeError::OutOfRangeGrade { value: n })
            );
        }
        assert_eq!(
            convert_grade(&text("4.5")),
            Err(GradeError::OutOfRangeGrade { value: 4.5 })
        );
        assert_eq!(
            convert_grade(&text("-1")),
            Err(GradeError::OutOfRangeGrade { value: -1.0 })
        );
    }

    #[test]
    fn garbage_fails_with_original_input() {
        for raw in ["", "A", "AB", "abc", "3.5x", " E E "] {
            assert_eq!(
                convert_grade(&text(raw)),
                Err(GradeError::InvalidGradeFormat { input: raw.into() })
            );
        }
    }

    #[test]
    fn non_finite_values_are_not_grades() {
        assert!(matches!(
            convert_grade(&text("NaN")),
            Err(GradeError::InvalidGradeFormat { .. })
        ));
        assert!(matches!(
            convert_grade(&text("inf")),
            Err(GradeError::InvalidGradeFormat { .. })
        ));
        assert!(matches!(
            convert_grade(&GradeInput::Number(f64::NAN)),
            Err(GradeError::InvalidGradeFormat { .. })
        ));
    }

    #[test]
    fn letter_grade_parse_and_display() {
        assert_eq!("ba".parse::<LetterGrade>().unwrap(), LetterGrade::BA);
        assert_eq!(LetterGrade::CC.to_string(), "CC");
        assert!("EE".parse::<LetterGrade>().is_err());
    }
}
