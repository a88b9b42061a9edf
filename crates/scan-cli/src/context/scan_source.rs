use std::collections::HashSet;
use std::path::{Path, PathBuf};

use anyhow::Context;
use scan_config::DataConfig;
use scan_core::Scan;
use scan_core::seed::default_scans;
use scan_schema::SchemaRegistry;

/// Where the review queue comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScanSource {
    /// The five demo scans compiled into the binary.
    BuiltIn,
    /// A JSON file holding an array of scans.
    File(PathBuf),
}

impl ScanSource {
    /// Pick the source: explicit `--scans` flag, then `data.scans_path`, then built-in.
    #[must_use]
    pub fn resolve(flag: Option<&str>, data: &DataConfig) -> Self {
        flag.map(str::trim)
            .filter(|path| !path.is_empty())
            .map(PathBuf::from)
            .or_else(|| data.scans_path())
            .map_or(Self::BuiltIn, Self::File)
    }

    /// Human-readable origin, used in `scans` output.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::BuiltIn => String::from("built-in demo scans"),
            Self::File(path) => path.display().to_string(),
        }
    }

    /// Load the scans in queue order.
    ///
    /// File contents are validated element-by-element against the `scan`
    /// schema before deserialization, and scan ids must be unique.
    pub fn load(&self, schemas: &SchemaRegistry) -> anyhow::Result<Vec<Scan>> {
        let scans = match self {
            Self::BuiltIn => default_scans(),
            Self::File(path) => load_file(path, schemas)
                .with_context(|| format!("failed to load scans from {}", path.display()))?,
        };
        tracing::info!(source = %self.describe(), scans = scans.len(), "scans loaded");
        Ok(scans)
    }
}

fn load_file(path: &Path, schemas: &SchemaRegistry) -> anyhow::Result<Vec<Scan>> {
    let raw = std::fs::read_to_string(path).context("failed to read file")?;
    let value: serde_json::Value = serde_json::from_str(&raw).context("invalid JSON")?;
    schemas.validate_each("scan", &value)?;
    let scans: Vec<Scan> = serde_json::from_value(value)?;

    let mut seen = HashSet::new();
    if let Some(duplicate) = scans.iter().find(|scan| !seen.insert(scan.id.as_str())) {
        anyhow::bail!("duplicate scan id '{}'", duplicate.id);
    }

    Ok(scans)
}
