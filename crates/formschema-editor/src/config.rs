//! Editor configuration.
//!
//! Stored as TOML in a `formschema.toml` file, found by searching upward from
//! the working directory:
//!
//! ```toml
//! indent = 4
//! max-depth = 16
//! ```

use std::path::{Path, PathBuf};

use formschema_json::DEFAULT_MAX_DEPTH;
use serde::Deserialize;

/// The standard configuration filename.
pub const CONFIG_FILENAME: &str = "formschema.toml";

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Toml(#[from] toml::de::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct EditorConfig {
    /// Spaces per indentation level of the document text.
    pub indent: usize,
    /// Nesting limit applied when decoding document text.
    pub max_depth: usize,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            indent: 2,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl EditorConfig {
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let source = std::fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }

    /// Find the configuration file by searching upward from the given directory.
    pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
        let mut current = start_dir.to_path_buf();
        loop {
            let config_path = current.join(CONFIG_FILENAME);
            if config_path.exists() {
                return Some(config_path);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Load the nearest configuration file, or the defaults if there is none.
    pub fn discover(start_dir: &Path) -> Result<Self, ConfigError> {
        match Self::find_config_file(start_dir) {
            Some(path) => {
                tracing::debug!(path = %path.display(), "loading editor config");
                Self::load(&path)
            }
            None => Ok(Self::default()),
        }
    }
}
