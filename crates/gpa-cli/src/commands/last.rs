//! The `gpa last` command.

use std::path::PathBuf;

use anyhow::Result;

pub fn execute(config_path: Option<PathBuf>) -> Result<()> {
    let (_, store) = super::open_store(config_path)?;

    match store.get_last_form_data() {
        Some(form) => println!("{}", serde_json::to_string_pretty(&form)?),
        None => println!("No saved form data."),
    }
    Ok(())
}
