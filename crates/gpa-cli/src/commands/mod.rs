//! Subcommand implementations.

use std::path::PathBuf;

use anyhow::Result;

use gpa_core::store::CalculationStore;
use gpa_storage::{load_config_from, FileStorage, GpaConfig};

pub mod calculate;
pub mod clear;
pub mod delete;
pub mod history;
pub mod init;
pub mod last;
pub mod show;
pub mod trend;

/// Load the config and open the store it points at.
pub fn open_store(
    config_path: Option<PathBuf>,
) -> Result<(GpaConfig, CalculationStore<FileStorage>)> {
    let config = load_config_from(config_path.as_deref())?;
    tracing::debug!("using data directory {}", config.data_dir.display());
    let store = CalculationStore::new(config.storage());
    Ok((config, store))
}

/// Format a millisecond timestamp for display.
pub fn format_timestamp(millis: i64) -> String {
    chrono::DateTime::from_timestamp_millis(millis)
        .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| millis.to_string())
}
