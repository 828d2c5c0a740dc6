//! Configuration and saved context.
//!
//! Handles:
//! - Config directory resolution
//! - The saved default context (partition, region, account)

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use arnkit_arn::Ctx;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Configuration file name.
const CONFIG_FILE: &str = "config.json";

/// Partition used when neither a flag nor the saved context sets one.
pub const DEFAULT_PARTITION: &str = "aws";

/// Get the config directory path.
fn config_dir() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var("ARN_CONFIG_DIR") {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "arnkit", "arn")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
}

/// CLI configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Saved default context.
    #[serde(default)]
    pub context: SavedContext,
}

impl Config {
    /// Load config from disk, or return default.
    pub fn load() -> Result<Self> {
        Self::load_from(&config_dir()?.join(CONFIG_FILE))
    }

    /// Load config from a specific file, or return default if it is missing.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;

        let config = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config from {:?}", path))?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Save config to disk.
    pub fn save(&self) -> Result<()> {
        self.save_to(&config_dir()?.join(CONFIG_FILE))
    }

    /// Save config to a specific file, creating its directory.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let contents = serde_json::to_string_pretty(self)?;

        #[cfg(unix)]
        {
            use std::io::Write;
            use std::os::unix::fs::OpenOptionsExt;

            let mut file = fs::OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .mode(0o600)
                .open(path)
                .with_context(|| format!("Failed to write config to {:?}", path))?;
            file.write_all(contents.as_bytes())?;
        }

        #[cfg(not(unix))]
        {
            fs::write(path, contents)
                .with_context(|| format!("Failed to write config to {:?}", path))?;
        }

        debug!(path = %path.display(), "saved config");
        Ok(())
    }
}

/// Saved default context. Unset fields fall back to flags or defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedContext {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partition: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub account: Option<String>,
}

impl SavedContext {
    /// Builds a context, preferring each explicit value over the saved one.
    pub fn resolve(
        &self,
        partition: Option<&str>,
        region: Option<&str>,
        account: Option<&str>,
    ) -> Ctx {
        Ctx::new(
            partition
                .or(self.partition.as_deref())
                .unwrap_or(DEFAULT_PARTITION),
            region.or(self.region.as_deref()).unwrap_or_default(),
            account.or(self.account.as_deref()).unwrap_or_default(),
        )
    }

    /// Returns true if nothing is saved.
    pub fn is_empty(&self) -> bool {
        self.partition.is_none() && self.region.is_none() && self.account.is_none()
    }
}
