mod types;

pub use types::*;

use anyhow::{Context, Result};
use std::path::Path;

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

    let default_paths = ["./markcut.toml", "~/.config/markcut/config.toml"];

    for path_str in default_paths {
        let path = shellexpand::tilde(path_str);
        let path = Path::new(path.as_ref());
        if path.exists() {
            tracing::debug!("Using config file {:?}", path);
            return load_config(path);
        }
    }

    Ok(Config::default())
}

/// Validate configuration
pub fn validate_config(config: &Config) -> Result<()> {
    let output = &config.output;

    for (field, value) in [
        ("chunk_prefix", &output.chunk_prefix),
        ("chunk_extension", &output.chunk_extension),
    ] {
        if value.contains(['/', '\\', '\'']) {
            anyhow::bail!(
                "output.{} {:?} must not contain path separators or quotes",
                field,
                value
            );
        }
    }

    if output.chunk_extension.is_empty() {
        anyhow::bail!("output.chunk_extension cannot be empty");
    }

    if output.manifest.as_os_str().is_empty() {
        anyhow::bail!("output.manifest cannot be empty");
    }

    if output.output.as_os_str().is_empty() {
        anyhow::bail!("output.output cannot be empty");
    }

    if config.pipeline.jobs == 0 {
        anyhow::bail!("pipeline.jobs must be at least 1");
    }

    Ok(())
}
