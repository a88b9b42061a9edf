use scan_config::{ENV_PREFIX, ScanReviewConfig};

/// Emit warnings for likely mistyped env var keys that silently fell back to defaults.
pub fn warn_unconfigured(config: &ScanReviewConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &ScanReviewConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env
        .into_iter()
        .map(|(key, _)| key)
        .filter(|key| key.starts_with(ENV_PREFIX))
        .collect::<Vec<_>>();

    let mut warnings = Vec::new();

    if !config.data.is_configured() && has_single_underscore_key(&env_keys, "DATA") {
        warnings.push(
            "Data config appears default while SCAN_REVIEW_DATA* env vars exist. Use double underscores (example: SCAN_REVIEW_DATA__SCANS_PATH)."
                .to_string(),
        );
    }

    if has_single_underscore_key(&env_keys, "REVIEW") {
        warnings.push(
            "SCAN_REVIEW_REVIEW_* env vars are ignored. Use double underscores (example: SCAN_REVIEW_REVIEW__RECENT_LIMIT)."
                .to_string(),
        );
    }

    warnings
}

/// True when some key names `section` but does not use the `__` separator after it.
fn has_single_underscore_key(keys: &[String], section: &str) -> bool {
    let prefix = format!("{ENV_PREFIX}{section}");
    let nested = format!("{prefix}__");
    keys.iter()
        .any(|key| key.starts_with(&prefix) && !key.starts_with(&nested))
}
