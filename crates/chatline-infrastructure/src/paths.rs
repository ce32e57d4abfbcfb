//! Path management for chatline configuration files.
//!
//! # Directory Structure
//!
//! ```text
//! ~/.config/chatline/          # Config directory
//! └── config.toml              # Server, auth and chat settings
//! ```

use chatline_core::ChatlineError;
use chatline_core::error::Result;
use std::path::PathBuf;

const APP_DIR: &str = "chatline";
const CONFIG_FILE: &str = "config.toml";

pub struct ChatlinePaths;

impl ChatlinePaths {
    /// Returns the chatline configuration directory (e.g. `~/.config/chatline/`).
    ///
    /// # Errors
    ///
    /// Returns a config error if the platform config directory is unknown.
    pub fn config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or_else(|| ChatlineError::config("Cannot find config directory"))
    }

    /// Returns the path to `config.toml`.
    pub fn config_file() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE))
    }
}
