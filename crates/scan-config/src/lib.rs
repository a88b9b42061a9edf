//! # scan-config
//!
//! Layered configuration loading for Scan Review using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`SCAN_REVIEW_*` prefix, `__` as separator)
//! 2. Project-level `.scan-review/config.toml`
//! 3. User-level `~/.config/scan-review/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `SCAN_REVIEW_REVIEW__RECENT_LIMIT` -> `review.recent_limit`,
//! `SCAN_REVIEW_DATA__SCANS_PATH` -> `data.scans_path`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use scan_config::ScanReviewConfig;
//!
//! let config = ScanReviewConfig::load_with_dotenv().expect("config");
//!
//! if let Some(path) = config.data.scans_path() {
//!     println!("Reviewing scans from {}", path.display());
//! }
//! ```

mod data;
mod error;
mod review;

pub use data::DataConfig;
pub use error::ConfigError;
pub use review::ReviewConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variable prefix for every setting.
pub const ENV_PREFIX: &str = "SCAN_REVIEW_";

/// Project-local configuration file, relative to the working directory.
pub const PROJECT_CONFIG_PATH: &str = ".scan-review/config.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct ScanReviewConfig {
    #[serde(default)]
    pub review: ReviewConfig,
    #[serde(default)]
    pub data: DataConfig,
}

impl ScanReviewConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`load_with_dotenv`](Self::load_with_dotenv)
    /// if you need `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Figment` when a source cannot be parsed and
    /// `ConfigError::InvalidValue` when a value fails validation.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Same as [`load`](Self::load).
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        // A missing .env is normal.
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Extract and validate a config from an arbitrary figment.
    ///
    /// # Errors
    ///
    /// Same as [`load`](Self::load).
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Check every section.
    ///
    /// # Errors
    ///
    /// Returns the first `ConfigError::InvalidValue` found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.review.validate()
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(PROJECT_CONFIG_PATH);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Path to the user-global config file.
    #[must_use]
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("scan-review").join("config.toml"))
    }
}
