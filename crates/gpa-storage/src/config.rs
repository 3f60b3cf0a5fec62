//! Configuration loading.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::file::FileStorage;

/// Environment variable that overrides `data_dir`.
pub const DATA_DIR_ENV: &str = "GPA_DATA_DIR";

/// Top-level gpa configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GpaConfig {
    /// Directory holding the stored history and form data.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Decimal places shown for GPA values.
    #[serde(default = "default_decimals")]
    pub decimals: u32,
    /// Credit used for a course given without one.
    #[serde(default = "default_credit")]
    pub default_credit: u32,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("./gpa-data")
}
fn default_decimals() -> u32 {
    2
}
fn default_credit() -> u32 {
    3
}

impl Default for GpaConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            decimals: default_decimals(),
            default_credit: default_credit(),
        }
    }
}

impl GpaConfig {
    /// File storage rooted at the configured data directory.
    pub fn storage(&self) -> FileStorage {
        FileStorage::new(&self.data_dir)
    }
}

/// Resolve environment variable references like `${VAR_NAME}` in a string.
///
/// Substituted values are copied as-is and never expanded again.
fn resolve_env_vars(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(start) = rest.find("${") {
        let Some(end) = rest[start..].find('}') else {
            break;
        };
        let var_name = &rest[start + 2..start + end];
        result.push_str(&rest[..start]);
        result.push_str(&std::env::var(var_name).unwrap_or_default());
        rest = &rest[start + end + 1..];
    }
    result.push_str(rest);
    result
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order without an explicit path:
/// 1. `gpa.toml` in the current directory
/// 2. `~/.config/gpa/config.toml`
///
/// `GPA_DATA_DIR` overrides the data directory.
pub fn load_config_from(path: Option<&Path>) -> Result<GpaConfig> {
    let config_path = match path {
        Some(p) if p.exists() => Some(p.to_path_buf()),
        Some(p) => anyhow::bail!("config file not found: {}", p.display()),
        None => {
            let local = PathBuf::from("gpa.toml");
            if local.exists() {
                Some(local)
            } else {
                dirs_path()
                    .map(|home| home.join("config.toml"))
                    .filter(|global| global.exists())
            }
        }
    };

    let mut config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            let config = parse_config(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?;
            tracing::debug!("loaded config from {}", path.display());
            config
        }
        None => GpaConfig::default(),
    };

    if let Ok(dir) = std::env::var(DATA_DIR_ENV) {
        if !dir.is_empty() {
            config.data_dir = PathBuf::from(dir);
        }
    }

    let resolved = resolve_env_vars(&config.data_dir.to_string_lossy());
    config.data_dir = PathBuf::from(resolved);

    Ok(config)
}

/// Parse a TOML config document.
pub fn parse_config(content: &str) -> Result<GpaConfig> {
    let config: GpaConfig = toml::from_str(content)?;
    anyhow::ensure!(config.decimals <= 6, "decimals must be at most 6");
    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("gpa"))
}

/// Starter configuration written by `gpa init`.
pub const SAMPLE_CONFIG: &str = r#"# gpa configuration

# Where calculation history and the last form are stored.
data_dir = "./gpa-data"

# Decimal places shown for GPA values.
decimals = 2

# Credit used when a course is given without one (e.g. `--course AA`).
default_credit = 3
"#;
