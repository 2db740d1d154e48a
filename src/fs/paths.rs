//! Path resolution utilities for homy
//!
//! All local state lives in a `.homy` directory under the working root.

use std::path::{Path, PathBuf};

/// Name of the local state directory
pub const HOMY_DIR: &str = ".homy";

/// Resolve the current working directory, optionally using an override.
///
/// # Arguments
/// * `cwd_option` - Optional override for the working directory
///
/// # Returns
/// The resolved working directory path
pub fn resolve_cwd(cwd_option: Option<&Path>) -> PathBuf {
    match cwd_option {
        Some(path) => path.to_path_buf(),
        None => std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
    }
}

/// Get the path to the .homy directory.
pub fn get_homy_dir(root: &Path) -> PathBuf {
    root.join(HOMY_DIR)
}

/// Get the path to config.json.
pub fn get_config_path(root: &Path) -> PathBuf {
    get_homy_dir(root).join("config.json")
}

/// Get the path to the cached booking list.
pub fn get_cache_path(root: &Path) -> PathBuf {
    get_homy_dir(root).join("bookings.json")
}
