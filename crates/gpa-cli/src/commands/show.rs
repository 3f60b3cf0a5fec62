//! The `gpa show` command.

use std::path::PathBuf;

use anyhow::Result;

pub fn execute(config_path: Option<PathBuf>, id: String) -> Result<()> {
    let (_, store) = super::open_store(config_path)?;

    let Some(calc) = store.get(&id) else {
        anyhow::bail!("no saved calculation with id {id}");
    };

    println!("{}", serde_json::to_string_pretty(&calc)?);
    Ok(())
}
