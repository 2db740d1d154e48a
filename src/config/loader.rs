//! Configuration loading with defaults

use std::path::Path;

use crate::errors::{HomyError, Result};
use crate::fs;
use crate::schemas::Config;

/// Overrides `api_base_url`
pub const ENV_API_URL: &str = "HOMY_API_URL";
/// Overrides `api_token`
pub const ENV_API_TOKEN: &str = "HOMY_API_TOKEN";
/// Overrides `send_email` (`true`/`false`/`1`/`0`)
pub const ENV_SEND_EMAIL: &str = "HOMY_SEND_EMAIL";

/// Load configuration for a working root.
///
/// Reads `.homy/config.json` if present (missing fields take defaults), then
/// applies `HOMY_*` environment overrides.
pub fn load_config(root: &Path) -> Result<Config> {
    let config = fs::read_config(root)?;
    apply_env_overrides(config, |key| std::env::var(key).ok())
}

/// Apply environment overrides using the given lookup.
pub fn apply_env_overrides<F>(mut config: Config, lookup: F) -> Result<Config>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(url) = lookup(ENV_API_URL).filter(|v| !v.trim().is_empty()) {
        config.api_base_url = url.trim().to_string();
    }
    if let Some(token) = lookup(ENV_API_TOKEN).filter(|v| !v.trim().is_empty()) {
        config.api_token = Some(token.trim().to_string());
    }
    if let Some(raw) = lookup(ENV_SEND_EMAIL) {
        config.send_email = match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" => true,
            "0" | "false" | "no" => false,
            other => {
                return Err(HomyError::ConfigError(format!(
                    "{} must be true or false, got {:?}",
                    ENV_SEND_EMAIL, other
                )));
            }
        };
    }
    if config.timeout_seconds == 0 {
        return Err(HomyError::ConfigError("timeout_seconds must be positive".to_string()));
    }
    Ok(config)
}
