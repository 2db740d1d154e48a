//! Configuration loading

mod loader;

pub use loader::{apply_env_overrides, load_config, ENV_API_TOKEN, ENV_API_URL, ENV_SEND_EMAIL};
