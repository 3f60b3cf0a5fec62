//! The `gpa delete` command.

use std::path::PathBuf;

use anyhow::Result;

pub fn execute(config_path: Option<PathBuf>, id: String) -> Result<()> {
    let (_, store) = super::open_store(config_path)?;

    let existed = store.get(&id).is_some();
    store.delete(&id)?;

    if existed {
        println!("Deleted {id}");
    } else {
        println!("No saved calculation with id {id}, nothing deleted.");
    }
    Ok(())
}
