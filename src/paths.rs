//! Filesystem locations used by moulberry-utils
//!
//! ```text
//! <config dir>/moulberry-utils/
//! └── config.toml      # seed and named weighted tables
//! ```
//!
//! `<config dir>` is the platform config directory (`~/.config` on Linux),
//! falling back to the working directory when it cannot be determined.

use std::path::PathBuf;

/// Directory name under the platform config directory
pub const APP_DIR: &str = "moulberry-utils";

/// Config filename
const CONFIG_FILE: &str = "config.toml";

/// Get the directory holding the global config.
#[must_use]
pub fn global_config_dir() -> PathBuf {
    dirs::config_dir().unwrap_or_else(|| PathBuf::from(".")).join(APP_DIR)
}

/// Get the global config file path.
#[must_use]
pub fn global_config() -> PathBuf {
    global_config_dir().join(CONFIG_FILE)
}
