//! Pipeline configuration.
//!
//! Every path is relative to `root` unless it is absolute.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::consolidate::DEFAULT_DELIMITER;
use crate::error::{ClarityError, Result};
use crate::filter::DEFAULT_COMMENT_MARKER;

/// Name of the optional config file looked up in the rules root.
pub const CONFIG_FILE_NAME: &str = "clarity.json";

pub const DEFAULT_SOURCE_FILE: &str = "definitions.txt";
pub const DEFAULT_ARTIFACT_FILE: &str = "definitions.rs";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClarityConfig {
    pub root: PathBuf,
    pub source: PathBuf,
    pub artifact: PathBuf,
    pub delimiter: String,
    pub comment_marker: String,
}

impl Default for ClarityConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            source: PathBuf::from(DEFAULT_SOURCE_FILE),
            artifact: PathBuf::from(DEFAULT_ARTIFACT_FILE),
            delimiter: DEFAULT_DELIMITER.to_string(),
            comment_marker: DEFAULT_COMMENT_MARKER.to_string(),
        }
    }
}

impl ClarityConfig {
    /// Default configuration rooted at `root`.
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }

    /// Load `clarity.json` from `root` if present, otherwise use defaults.
    ///
    /// The `root` field in the file, if any, is ignored in favour of the
    /// directory the file was found in.
    pub fn discover(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        let path = root.join(CONFIG_FILE_NAME);
        let mut config = if path.is_file() {
            Self::from_file(&path)?
        } else {
            Self::default()
        };
        config.root = root;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| {
            ClarityError::Config(format!("failed to read '{}': {}", path.display(), e))
        })?;
        Self::from_json(&text)
            .map_err(|e| ClarityError::Config(format!("'{}': {}", path.display(), e)))
    }

    pub fn from_json(text: &str) -> std::result::Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    pub fn validate(&self) -> Result<()> {
        if self.comment_marker.is_empty() {
            return Err(ClarityError::Config("comment_marker must not be empty".to_string()));
        }
        if self.source_path() == self.artifact_path() {
            return Err(ClarityError::Config(format!(
                "source and artifact both resolve to '{}'",
                self.source_path().display()
            )));
        }
        Ok(())
    }

    pub fn source_path(&self) -> PathBuf {
        self.root.join(&self.source)
    }

    pub fn artifact_path(&self) -> PathBuf {
        self.root.join(&self.artifact)
    }
}
