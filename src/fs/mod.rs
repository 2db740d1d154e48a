//! File system utilities for homy
//!
//! Provides path resolution and JSON file operations.

mod json;
mod paths;

pub use json::{
    read_bookings_cache, read_config, read_json, write_bookings_cache, write_json,
};
pub use paths::{get_cache_path, get_config_path, get_homy_dir, resolve_cwd, HOMY_DIR};
