//! Config schema - Configuration for homy

use serde::{Deserialize, Serialize};

/// Production backend used when nothing else is configured
pub const DEFAULT_API_BASE_URL: &str = "https://homy-sofa-backend-production.up.railway.app/api";

/// Main configuration for homy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Schema version for forward compatibility
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Base URL of the booking REST API, including the `/api` prefix
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Bearer token for the admin API
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_token: Option<String>,

    /// Ask the backend to email the customer on status changes
    #[serde(default = "default_send_email")]
    pub send_email: bool,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,

    /// Keep a local copy of the booking list in .homy/bookings.json
    #[serde(default = "default_cache_enabled")]
    pub cache_enabled: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn default_send_email() -> bool {
    true
}

fn default_timeout_seconds() -> u64 {
    30
}

fn default_cache_enabled() -> bool {
    true
}

impl Config {
    /// Base URL without a trailing slash
    pub fn api_base(&self) -> &str {
        self.api_base_url.trim_end_matches('/')
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            schema_version: 1,
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            api_token: None,
            send_email: true,
            timeout_seconds: 30,
            cache_enabled: true,
        }
    }
}
