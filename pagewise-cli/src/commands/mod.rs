use std::path::Path;

use anyhow::{Context, Result};
use pagewise::config::Config;
use pagewise::observability::init_tracing;

pub mod paginate;
pub mod range;
pub mod related;

/// Load configuration and install the tracing subscriber
///
/// `--verbose` raises the log level to debug regardless of configuration.
pub fn load_config(path: Option<&Path>, verbose: bool) -> Result<Config> {
    let mut config = match path {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => Config::load().context("Failed to load configuration")?,
    };

    if verbose {
        config.logging.level = "debug".to_string();
    }

    init_tracing(&config.logging).context("Failed to initialize tracing")?;
    Ok(config)
}
