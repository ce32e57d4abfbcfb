//! Configuration service implementation.
//!
//! Loads `ChatlineConfig` from `~/.config/chatline/config.toml` and applies
//! environment overrides on top.
//!
//! Priority: environment variables > config.toml > built-in defaults

use crate::paths::ChatlinePaths;
use chatline_core::ChatlineError;
use chatline_core::config::ChatlineConfig;
use chatline_core::error::Result;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

pub const ENV_BASE_URL: &str = "CHATLINE_BASE_URL";
pub const ENV_TOKEN: &str = "CHATLINE_TOKEN";
pub const ENV_SOURCE: &str = "CHATLINE_SOURCE";

/// Configuration service that loads and caches the client configuration.
#[derive(Debug, Clone)]
pub struct ConfigService {
    path: PathBuf,
    /// Cached configuration loaded from file.
    config: Arc<RwLock<Option<ChatlineConfig>>>,
}

impl ConfigService {
    /// Creates a service reading the default `config.toml`.
    pub fn new_default() -> Result<Self> {
        Ok(Self::with_path(ChatlinePaths::config_file()?))
    }

    /// Creates a service reading the given file.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            config: Arc::new(RwLock::new(None)),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Gets the configuration, loading it from file if not cached.
    ///
    /// A missing file yields the defaults; a malformed file is an error.
    pub fn get_config(&self) -> Result<ChatlineConfig> {
        {
            let cached = self
                .config
                .read()
                .map_err(|e| ChatlineError::internal(format!("Config cache poisoned: {}", e)))?;
            if let Some(config) = cached.as_ref() {
                return Ok(config.clone());
            }
        }

        let mut loaded = Self::load_file(&self.path)?;
        apply_env_overrides(&mut loaded, |key| std::env::var(key).ok());

        let mut cache = self
            .config
            .write()
            .map_err(|e| ChatlineError::internal(format!("Config cache poisoned: {}", e)))?;
        *cache = Some(loaded.clone());

        Ok(loaded)
    }

    /// Invalidates the cache, forcing a reload on next access.
    pub fn invalidate_cache(&self) {
        if let Ok(mut cache) = self.config.write() {
            *cache = None;
        }
    }

    /// Writes `config` to the file, creating the directory if needed.
    pub fn save(&self, config: &ChatlineConfig) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(config)?;
        fs::write(&self.path, content)?;
        tracing::info!("[ConfigService] Saved configuration to {}", self.path.display());

        self.invalidate_cache();
        Ok(())
    }

    fn load_file(path: &Path) -> Result<ChatlineConfig> {
        if !path.exists() {
            tracing::debug!(
                "[ConfigService] No config at {}, using defaults",
                path.display()
            );
            return Ok(ChatlineConfig::default());
        }

        let content = fs::read_to_string(path)?;
        let config = toml::from_str(&content).map_err(|e| {
            ChatlineError::config(format!(
                "Failed to parse configuration file at {}: {}",
                path.display(),
                e
            ))
        })?;
        tracing::debug!("[ConfigService] Loaded config from {}", path.display());
        Ok(config)
    }
}

/// Overrides file values with `CHATLINE_*` variables from `lookup`.
pub fn apply_env_overrides<F>(config: &mut ChatlineConfig, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(base_url) = lookup(ENV_BASE_URL) {
        config.server.base_url = base_url;
    }
    if let Some(token) = lookup(ENV_TOKEN) {
        config.auth.token = Some(token);
    }
    if let Some(source) = lookup(ENV_SOURCE) {
        config.server.source = source;
    }
}
