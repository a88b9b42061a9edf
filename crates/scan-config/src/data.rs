//! Scan source configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct DataConfig {
    /// JSON file holding an array of scans. Empty means the built-in demo scans.
    #[serde(default)]
    pub scans_path: String,
}

impl DataConfig {
    /// Returns `true` if an external scan file is configured.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.scans_path.trim().is_empty()
    }

    /// The configured scan file, if any.
    #[must_use]
    pub fn scans_path(&self) -> Option<PathBuf> {
        self.is_configured()
            .then(|| PathBuf::from(self.scans_path.trim()))
    }
}
