//! Configuration management using Figment
//!
//! Configuration is loaded from multiple sources with the following precedence (highest to lowest):
//! 1. Environment variables (prefix: PAGEWISE_, nested keys split on `__`)
//! 2. Current working directory: ./pagewise.toml
//! 3. XDG config directory: ~/.config/pagewise/config.toml
//! 4. System directory: /etc/pagewise/config.toml
//! 5. Default values

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::pagination::{PageLimits, MAX_PAGE_SIZE, MIN_PAGE_SIZE};
use crate::related::{DEFAULT_CATEGORY_MATCH_SCORE, DEFAULT_MAX_RECOMMENDATIONS, DEFAULT_TAG_MATCH_SCORE};

const APP_NAME: &str = "pagewise";
const ENV_PREFIX: &str = "PAGEWISE_";

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Pagination defaults
    #[serde(default)]
    pub pagination: PaginationConfig,

    /// Related-post ranking
    #[serde(default)]
    pub related: RelatedConfig,

    /// Logging
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Pagination defaults
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationConfig {
    /// Smallest page size; smaller or non-numeric sizes reset to this
    #[serde(default = "default_min_page_size")]
    pub min_page_size: u32,

    /// Largest page size; bigger sizes clamp to this
    #[serde(default = "default_max_page_size")]
    pub max_page_size: u32,

    /// Page size used when the caller gives none
    #[serde(default = "default_page_size")]
    pub default_page_size: u32,

    /// Materialize the page list in results
    #[serde(default = "default_false")]
    pub include_page_list: bool,

    /// Echo the effective limits in results
    #[serde(default = "default_true")]
    pub echo_limits: bool,
}

impl PaginationConfig {
    /// Page size bounds as [`PageLimits`]
    pub fn limits(&self) -> PageLimits {
        PageLimits::new(self.min_page_size, self.max_page_size)
    }
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            min_page_size: default_min_page_size(),
            max_page_size: default_max_page_size(),
            default_page_size: default_page_size(),
            include_page_list: false,
            echo_limits: true,
        }
    }
}

/// Related-post ranking configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelatedConfig {
    /// How many posts to recommend
    #[serde(default = "default_max_recommendations")]
    pub max_recommendations: usize,

    /// Score for sharing the current post's category
    #[serde(default = "default_category_match_score")]
    pub category_match_score: f64,

    /// Score per shared tag
    #[serde(default = "default_tag_match_score")]
    pub tag_match_score: f64,
}

impl Default for RelatedConfig {
    fn default() -> Self {
        Self {
            max_recommendations: default_max_recommendations(),
            category_match_score: default_category_match_score(),
            tag_match_score: default_tag_match_score(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level or filter directive (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Emit JSON lines instead of human-readable output
    #[serde(default = "default_false")]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

fn default_min_page_size() -> u32 {
    MIN_PAGE_SIZE
}

fn default_max_page_size() -> u32 {
    MAX_PAGE_SIZE
}

fn default_page_size() -> u32 {
    20
}

fn default_max_recommendations() -> usize {
    DEFAULT_MAX_RECOMMENDATIONS
}

fn default_category_match_score() -> f64 {
    DEFAULT_CATEGORY_MATCH_SCORE
}

fn default_tag_match_score() -> f64 {
    DEFAULT_TAG_MATCH_SCORE
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_false() -> bool {
    false
}

impl Config {
    /// Load configuration from all sources
    ///
    /// Every config file found is merged, higher priority files overriding
    /// lower ones. Environment variables override all file-based configs.
    pub fn load() -> Result<Self> {
        let config_paths = Self::find_config_paths();

        tracing::debug!("Searching for config files in order:");
        for path in &config_paths {
            tracing::debug!("  - {}", path.display());
        }

        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));

        // Lowest priority first so later merges win
        for path in config_paths.iter().rev() {
            if path.exists() {
                tracing::info!("Loading configuration from: {}", path.display());
                figment = figment.merge(Toml::file(path));
            }
        }

        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));

        Self::extract(figment)
    }

    /// Load configuration from a specific file
    ///
    /// Skips the XDG and system directories. Environment variables still apply.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::NotFound(format!("config file {}", path.display())));
        }

        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(path))
            .merge(Env::prefixed(ENV_PREFIX).split("__"));

        Self::extract(figment)
    }

    fn extract(figment: Figment) -> Result<Self> {
        let config: Config = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that cannot be normalized into something meaningful
    pub fn validate(&self) -> Result<()> {
        let pagination = &self.pagination;
        if pagination.min_page_size > pagination.max_page_size {
            return Err(Error::Validation(format!(
                "pagination.min_page_size ({}) exceeds pagination.max_page_size ({})",
                pagination.min_page_size, pagination.max_page_size
            )));
        }

        for (name, score) in [
            ("related.category_match_score", self.related.category_match_score),
            ("related.tag_match_score", self.related.tag_match_score),
        ] {
            if !score.is_finite() || score < 0.0 {
                return Err(Error::Validation(format!(
                    "{name} must be a finite, non-negative number (got {score})"
                )));
            }
        }

        Ok(())
    }

    /// Find all possible config file paths
    ///
    /// Returns paths in priority order (highest first):
    /// 1. Current working directory
    /// 2. XDG config directory
    /// 3. System directory
    fn find_config_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from(format!("{APP_NAME}.toml"))];

        let xdg_dirs = xdg::BaseDirectories::with_prefix(APP_NAME);
        if let Some(path) = xdg_dirs.find_config_file("config.toml") {
            paths.push(path);
        }

        paths.push(PathBuf::from("/etc").join(APP_NAME).join("config.toml"));

        paths
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.pagination.min_page_size, 1);
        assert_eq!(config.pagination.max_page_size, 100);
        assert_eq!(config.pagination.default_page_size, 20);
        assert!(!config.pagination.include_page_list);
        assert!(config.pagination.echo_limits);
        assert_eq!(config.related.max_recommendations, 3);
        assert_eq!(config.related.category_match_score, 2.5);
        assert_eq!(config.related.tag_match_score, 1.0);
        assert_eq!(config.logging.level, "info");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_file_overrides_defaults() {
        let file = write_config(
            r#"
            [pagination]
            max_page_size = 50
            include_page_list = true

            [related]
            max_recommendations = 5
            "#,
        );

        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(config.pagination.max_page_size, 50);
        assert_eq!(config.pagination.min_page_size, 1);
        assert!(config.pagination.include_page_list);
        assert_eq!(config.related.max_recommendations, 5);
        assert_eq!(config.related.tag_match_score, 1.0);
        assert_eq!(config.pagination.limits(), PageLimits::new(1, 50));
    }

    #[test]
    fn test_load_from_rejects_inverted_limits() {
        let file = write_config(
            r#"
            [pagination]
            min_page_size = 40
            max_page_size = 10
            "#,
        );

        let err = Config::load_from(file.path()).unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }

    #[test]
    fn test_load_from_rejects_bad_types() {
        let file = write_config(
            r#"
            [pagination]
            max_page_size = "lots"
            "#,
        );

        let err = Config::load_from(file.path()).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_load_from_missing_file() {
        let err = Config::load_from("/definitely/not/here/pagewise.toml").unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }

    #[test]
    fn test_validate_rejects_negative_scores() {
        let mut config = Config::default();
        config.related.tag_match_score = -1.0;
        assert!(matches!(config.validate(), Err(Error::Validation(_))));

        config.related.tag_match_score = f64::NAN;
        assert!(matches!(config.validate(), Err(Error::Validation(_))));
    }
}
