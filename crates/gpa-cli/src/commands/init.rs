//! The `gpa init` command.

use anyhow::Result;

use gpa_storage::config::SAMPLE_CONFIG;

pub fn execute() -> Result<()> {
    if std::path::Path::new("gpa.toml").exists() {
        println!("gpa.toml already exists, skipping.");
    } else {
        std::fs::write("gpa.toml", SAMPLE_CONFIG)?;
        println!("Created gpa.toml");
    }

    println!("\nNext steps:");
    println!("  1. Edit gpa.toml to choose where history is stored");
    println!("  2. Run: gpa calculate --course AA:3 --course BB:4");
    println!("  3. Run: gpa history");

    Ok(())
}
