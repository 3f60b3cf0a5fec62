//! gpa-storage — durable storage and configuration.
//!
//! Implements the `KeyValueStorage` port from `gpa-core` on top of the file
//! system and loads the TOML configuration that points at it.

pub mod config;
pub mod file;

pub use config::{load_config_from, GpaConfig};
pub use file::FileStorage;
