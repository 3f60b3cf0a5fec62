//! The `gpa history` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};

use gpa_core::model::SavedCalculation;

pub fn execute(config_path: Option<PathBuf>, format: String) -> Result<()> {
    let (config, store) = super::open_store(config_path)?;
    let history = store.list();

    match format.as_str() {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&history)?);
        }
        _ => {
            if history.is_empty() {
                println!("No saved calculations.");
                return Ok(());
            }
            println!("{}", history_table(&history, config.decimals as usize));
        }
    }

    Ok(())
}

fn history_table(history: &[SavedCalculation], precision: usize) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        "#",
        "ID",
        "Date",
        "Label",
        "Courses",
        "Term GPA",
        "Cumulative GPA",
    ]);

    for (i, calc) in history.iter().enumerate() {
        let results = calc.results();
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(&calc.id),
            Cell::new(super::format_timestamp(calc.timestamp)),
            Cell::new(calc.label().unwrap_or("-")),
            Cell::new(calc.calculation.courses.len()),
            Cell::new(format!("{:.precision$}", results.term_gpa)),
            Cell::new(format!("{:.precision$}", results.cumulative_gpa)),
        ]);
    }

    table
}
