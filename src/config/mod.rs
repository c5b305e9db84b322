pub mod persist;
mod types;

pub use types::*;

use anyhow::{Context, Result};
use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Load configuration from a TOML file
pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    let config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;

    validate_config(&config)?;

    Ok(config)
}

/// Load config from default locations or return default config
pub fn load_config_or_default(custom_path: Option<&Path>) -> Result<Config> {
    if let Some(path) = custom_path {
        return load_config(path);
    }

    // Try default locations
    let default_paths = [
        "./cuestream.toml",
        "~/.config/cuestream/config.toml",
        "/etc/cuestream/config.toml",
    ];

    for path_str in default_paths {
        let path = shellexpand::tilde(path_str);
        let path = Path::new(path.as_ref());
        if path.exists() {
            return load_config(path);
        }
    }

    Ok(Config::default())
}

/// Validate configuration
pub fn validate_config(config: &Config) -> Result<()> {
    if config.decode.max_records == 0 {
        anyhow::bail!("decode.max_records cannot be 0");
    }

    if config.logging.filter.trim().is_empty() {
        anyhow::bail!("logging.filter cannot be empty");
    }

    // EnvFilter::new silently skips bad directives, so reject them here
    EnvFilter::try_new(&config.logging.filter)
        .with_context(|| format!("Invalid logging.filter: {:?}", config.logging.filter))?;

    Ok(())
}
