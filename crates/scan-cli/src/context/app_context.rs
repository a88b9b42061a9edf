use scan_config::ScanReviewConfig;
use scan_core::{ReviewSession, Scan, SessionStore};
use scan_schema::SchemaRegistry;

use super::ScanSource;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub config: ScanReviewConfig,
    pub source: ScanSource,
    pub schemas: SchemaRegistry,
    pub sessions: SessionStore,
}

impl AppContext {
    #[must_use]
    pub fn new(config: ScanReviewConfig, source: ScanSource) -> Self {
        Self {
            config,
            source,
            schemas: SchemaRegistry::new(),
            sessions: SessionStore::new(),
        }
    }

    /// Build the context, choosing the scan source from the `--scans` flag or config.
    #[must_use]
    pub fn init(config: ScanReviewConfig, scans_flag: Option<&str>) -> Self {
        let source = ScanSource::resolve(scans_flag, &config.data);
        tracing::debug!(source = %source.describe(), "scan source selected");
        Self::new(config, source)
    }

    /// Load the full scan list from the configured source.
    pub fn load_scans(&self) -> anyhow::Result<Vec<Scan>> {
        self.source.load(&self.schemas)
    }

    /// The session under `key`, loading scans on first access.
    pub fn session(&mut self, key: &str) -> anyhow::Result<&mut ReviewSession> {
        let source = &self.source;
        let schemas = &self.schemas;
        self.sessions
            .try_get_or_create(key, || source.load(schemas))
    }

    /// Drop the session under `key` and start a fresh one.
    pub fn reset_session(&mut self, key: &str) -> anyhow::Result<&mut ReviewSession> {
        self.sessions.reset(key);
        self.session(key)
    }

    /// Session key from the command line, falling back to `review.session_key`.
    #[must_use]
    pub fn session_key(&self, explicit: Option<&str>) -> String {
        explicit
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .unwrap_or(&self.config.review.session_key)
            .to_string()
    }
}
