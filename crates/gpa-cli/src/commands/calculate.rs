//! The `gpa calculate` command.

use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Serialize;

use gpa_core::engine::calculate_both_gpa;
use gpa_core::grade::{MAX_POINTS, MIN_POINTS};
use gpa_core::model::{Course, FormData, GpaResult, GradeInput, NewCalculation};

#[derive(Serialize)]
struct CalculationOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    #[serde(rename = "termGPA")]
    term_gpa: f64,
    #[serde(rename = "cumulativeGPA")]
    cumulative_gpa: f64,
}

pub fn execute(
    config_path: Option<PathBuf>,
    course_args: Vec<String>,
    existing_gpa: Option<f64>,
    existing_credits: Option<u32>,
    from_last: bool,
    label: Option<String>,
    no_save: bool,
    format: String,
) -> Result<()> {
    let (config, store) = super::open_store(config_path)?;

    let mut courses = course_args
        .iter()
        .map(|arg| parse_course(arg, config.default_credit))
        .collect::<Result<Vec<_>>>()?;

    // Values given on the command line win over the saved input.
    let (existing_gpa, existing_credits) = if from_last {
        let form = store
            .get_last_form_data()
            .context("no saved input to start from; run `gpa calculate` first")?;
        let (saved_gpa, saved_credits) = form.existing_record();
        if courses.is_empty() {
            courses = form.courses;
        }
        (
            existing_gpa.or(saved_gpa),
            existing_credits.unwrap_or(saved_credits),
        )
    } else {
        (existing_gpa, existing_credits.unwrap_or(0))
    };
    anyhow::ensure!(!courses.is_empty(), "at least one course is required");

    if let Some(gpa) = existing_gpa {
        anyhow::ensure!(
            (MIN_POINTS..=MAX_POINTS).contains(&gpa),
            "existing GPA must be between 0.0 and 4.0"
        );
    }

    let results =
        calculate_both_gpa(existing_gpa, existing_credits, &courses).context("calculation failed")?;

    let has_existing = existing_gpa.is_some();
    let id = if no_save {
        None
    } else {
        Some(store.save(NewCalculation {
            has_existing,
            existing_gpa,
            existing_credits: has_existing.then_some(existing_credits),
            courses: courses.clone(),
            results,
            label,
        })?)
    };

    // The last input is kept even when the result is not recorded.
    store.save_last_form_data(&FormData {
        has_existing,
        existing_gpa: existing_gpa.map(|g| g.to_string()).unwrap_or_default(),
        existing_credits: if has_existing { existing_credits } else { 0 },
        courses,
    });

    let shown: GpaResult = results.rounded(config.decimals);
    match format.as_str() {
        "json" => {
            let output = CalculationOutput {
                id,
                term_gpa: shown.term_gpa,
                cumulative_gpa: shown.cumulative_gpa,
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        _ => {
            let precision = config.decimals as usize;
            println!("Term GPA:       {:.precision$}", shown.term_gpa);
            println!("Cumulative GPA: {:.precision$}", shown.cumulative_gpa);
            if let Some(id) = id {
                println!("Saved as {id}");
            }
        }
    }

    Ok(())
}

/// Parse a `GRADE[:CREDIT]` argument.
///
/// Plain decimal grades like `3.7` are kept as numbers; everything else is
/// passed on as text for the grade converter to judge.
fn parse_course(arg: &str, default_credit: u32) -> Result<Course> {
    let (grade, credit) = match arg.rsplit_once(':') {
        Some((grade, credit)) => {
            let credit = credit
                .trim()
                .parse::<u32>()
                .with_context(|| format!("invalid credit in course {arg:?}"))?;
            (grade.trim(), credit)
        }
        None => (arg.trim(), default_credit),
    };

    let grade = if is_plain_decimal(grade) {
        grade
            .parse::<f64>()
            .map(GradeInput::Number)
            .unwrap_or_else(|_| GradeInput::from(grade))
    } else {
        GradeInput::from(grade)
    };

    Ok(Course { grade, credit })
}

fn is_plain_decimal(s: &str) -> bool {
    let (whole, frac) = match s.split_once('.') {
        Some((w, f)) => (w, Some(f)),
        None => (s, None),
    };
    let digits = |part: &str| !part.is_empty() && part.chars().all(|c| c.is_ascii_digit());
    digits(whole) && frac.map_or(true, digits)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_letter_with_credit() {
        assert_eq!(parse_course("AA:3", 2).unwrap(), Course::new("AA", 3));
        assert_eq!(parse_course(" ba : 4 ", 2).unwrap(), Course::new("ba", 4));
    }

    #[test]
    fn missing_credit_uses_default() {
        assert_eq!(parse_course("CC", 5).unwrap(), Course::new("CC", 5));
    }

    #[test]
    fn plain_decimals_become_numbers() {
        assert_eq!(parse_course("3.7:2", 3).unwrap(), Course::new(3.7, 2));
        assert_eq!(parse_course("4", 3).unwrap(), Course::new(4.0, 3));
        assert_eq!(parse_course("-1:3", 3).unwrap(), Course::new("-1", 3));
        assert_eq!(parse_course(".5:3", 3).unwrap(), Course::new(".5", 3));
    }

    #[test]
    fn bad_credit_is_an_error() {
        assert!(parse_course("AA:x", 3).is_err());
        assert!(parse_course("AA:-1", 3).is_err());
    }
}
