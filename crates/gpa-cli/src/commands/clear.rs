//! The `gpa clear` command.

use std::path::PathBuf;

use anyhow::Result;

pub fn execute(config_path: Option<PathBuf>, yes: bool) -> Result<()> {
    anyhow::ensure!(yes, "refusing to remove stored data without --yes");

    let (config, store) = super::open_store(config_path)?;
    store.clear_all()?;

    println!("Cleared all data in {}", config.data_dir.display());
    Ok(())
}
