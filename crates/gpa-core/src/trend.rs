//! GPA trend series over the saved history.

use std::cmp::Reverse;

use serde::{Deserialize, Serialize};

use crate::model::SavedCalculation;
use crate::store::MAX_HISTORY;

/// Fewest calculations needed before a trend is meaningful.
pub const MIN_TREND_POINTS: usize = 2;

/// One calculation on the trend line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    /// 1-based position, oldest first.
    pub position: usize,
    pub timestamp: i64,
    pub label: Option<String>,
    pub term_gpa: f64,
    pub cumulative_gpa: f64,
}

/// Movement across a trend series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendSummary {
    /// Term GPA change from the oldest to the newest point.
    pub term_change: f64,
    /// Cumulative GPA change from the oldest to the newest point.
    pub cumulative_change: f64,
    /// Term GPA change between the two newest points.
    pub last_term_change: f64,
    /// Cumulative GPA change between the two newest points.
    pub last_cumulative_change: f64,
}

/// Build the trend series from a history.
///
/// Returns `None` with fewer than two calculations. Otherwise the newest
/// [`MAX_HISTORY`] calculations are returned oldest first.
pub fn gpa_trend(calculations: &[SavedCalculation]) -> Option<Vec<TrendPoint>> {
    if calculations.len() < MIN_TREND_POINTS {
        return None;
    }

    // History is newest first, so equal timestamps keep the later index older.
    let mut sorted: Vec<(usize, &SavedCalculation)> = calculations.iter().enumerate().collect();
    sorted.sort_by_key(|(i, c)| (c.timestamp, Reverse(*i)));
    let start = sorted.len().saturating_sub(MAX_HISTORY);

    Some(
        sorted[start..]
            .iter()
            .enumerate()
            .map(|(i, (_, c))| TrendPoint {
                position: i + 1,
                timestamp: c.timestamp,
                label: c.calculation.label.clone(),
                term_gpa: c.results().term_gpa,
                cumulative_gpa: c.results().cumulative_gpa,
            })
            .collect(),
    )
}

/// Summarise a trend series. `None` when it has fewer than two points.
pub fn summarize(points: &[TrendPoint]) -> Option<TrendSummary> {
    if points.len() < MIN_TREND_POINTS {
        return None;
    }
    let first = &points[0];
    let last = &points[points.len() - 1];
    let previous = &points[points.len() - 2];

    Some(TrendSummary {
        term_change: last.term_gpa - first.term_gpa,
        cumulative_change: last.cumulative_gpa - first.cumulative_gpa,
        last_term_change: last.term_gpa - previous.term_gpa,
        last_cumulative_change: last.cumulative_gpa - previous.cumulative_gpa,
    })
}
