mod registry;

pub use registry::{Language, Registry};

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

use crate::error::ConfigError;

/// Name of the configuration file looked up in the working directory.
pub const CONFIG_FILE: &str = "config.json";

/// Extensions and line-skip patterns for one language.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageRule {
    /// Literal, case-sensitive path suffixes such as `.go` or `.test.ts`.
    #[serde(default)]
    pub extensions: Vec<String>,

    /// Lines matching any of these regexes are not counted.
    #[serde(default)]
    pub skip_patterns: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub languages: BTreeMap<String, LanguageRule>,
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        trace!(path = %path.display(), "loading config");

        let content = fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => ConfigError::not_found(path),
            _ => ConfigError::read_error(path, e),
        })?;

        let config = Self::from_json(&content).map_err(|e| ConfigError::parse_error(path, e))?;
        debug!(languages = config.languages.len(), "loaded config");
        Ok(config)
    }

    /// Loads [`CONFIG_FILE`] from the current working directory.
    pub fn load_from_cwd() -> Result<Self, ConfigError> {
        Self::load(default_path()?)
    }

    pub fn from_json(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }
}

pub fn default_path() -> Result<PathBuf, ConfigError> {
    std::env::current_dir()
        .map(|wd| wd.join(CONFIG_FILE))
        .map_err(|source| ConfigError::WorkingDirectory { source })
}
