//! The `gpa trend` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};

use gpa_core::trend::{gpa_trend, summarize, MIN_TREND_POINTS};

pub fn execute(config_path: Option<PathBuf>) -> Result<()> {
    let (config, store) = super::open_store(config_path)?;
    let precision = config.decimals as usize;

    let Some(points) = gpa_trend(&store.list()) else {
        println!("At least {MIN_TREND_POINTS} saved calculations are needed to show a trend.");
        return Ok(());
    };

    let mut table = Table::new();
    table.set_header(vec!["#", "Date", "Label", "Term GPA", "Cumulative GPA"]);
    for p in &points {
        table.add_row(vec![
            Cell::new(p.position),
            Cell::new(super::format_timestamp(p.timestamp)),
            Cell::new(p.label.as_deref().unwrap_or("-")),
            Cell::new(format!("{:.precision$}", p.term_gpa)),
            Cell::new(format!("{:.precision$}", p.cumulative_gpa)),
        ]);
    }
    println!("{table}");

    if let Some(summary) = summarize(&points) {
        println!(
            "\nTerm GPA: {:+.precision$} overall, {:+.precision$} since previous",
            summary.term_change, summary.last_term_change
        );
        println!(
            "Cumulative GPA: {:+.precision$} overall, {:+.precision$} since previous",
            summary.cumulative_change, summary.last_cumulative_change
        );
    }

    Ok(())
}
