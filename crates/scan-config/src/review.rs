//! Review loop configuration.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Default number of decisions shown by `recent`.
const fn default_recent_limit() -> u32 {
    5
}

fn default_session_key() -> String {
    String::from("terminal")
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct ReviewConfig {
    /// Number of decisions listed by `recent` when no limit is given.
    #[serde(default = "default_recent_limit")]
    pub recent_limit: u32,

    /// Key under which the interactive loop stores its session.
    #[serde(default = "default_session_key")]
    pub session_key: String,
}

impl Default for ReviewConfig {
    fn default() -> Self {
        Self {
            recent_limit: default_recent_limit(),
            session_key: default_session_key(),
        }
    }
}

impl ReviewConfig {
    /// Reject values the review loop cannot use.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for a zero `recent_limit` or a blank `session_key`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.recent_limit == 0 {
            return Err(ConfigError::InvalidValue {
                field: "review.recent_limit".into(),
                reason: "must be at least 1".into(),
            });
        }
        if self.session_key.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "review.session_key".into(),
                reason: "must not be empty".into(),
            });
        }
        Ok(())
    }
}
