//! Rule source reader.
//!
//! Reads the precompiled artifact when it exists, otherwise the editable
//! rule list as raw lines.

use std::fs;
use std::io;
use std::path::Path;

use log::debug;

use clarity_core::artifact::decode_artifact_bytes;
use clarity_core::error::{ClarityError, Result};
use clarity_core::{ClarityConfig, ConsolidatedOutput};

/// Where a read got its rules from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleSource {
    /// Already filtered, extended and consolidated when it was built.
    Compiled(ConsolidatedOutput),
    /// Raw lines from the editable list, not yet filtered.
    Lines(Vec<String>),
}

impl RuleSource {
    pub fn describe(&self) -> &'static str {
        match self {
            RuleSource::Compiled(_) => "precompiled artifact",
            RuleSource::Lines(_) => "rule source file",
        }
    }
}

/// Load rules, preferring the artifact unless `force_from_source` is set.
pub fn load_rules(config: &ClarityConfig, force_from_source: bool) -> Result<RuleSource> {
    let artifact = config.artifact_path();
    if !force_from_source && artifact.is_file() {
        debug!("Loading definitions from precompiled artifact '{}'", artifact.display());
        return load_artifact(&artifact).map(RuleSource::Compiled);
    }

    read_source_lines(config).map(RuleSource::Lines)
}

/// Read the editable rule list as raw lines.
pub fn read_source_lines(config: &ClarityConfig) -> Result<Vec<String>> {
    let source = config.source_path();
    let artifact = config.artifact_path();
    debug!("Loading definitions from rule source '{}'", source.display());
    let text = fs::read_to_string(&source).map_err(|e| {
        if e.kind() == io::ErrorKind::NotFound {
            ClarityError::MissingSource {
                source_path: source.clone(),
                artifact: artifact.clone(),
            }
        } else {
            ClarityError::SourceRead {
                path: source.clone(),
                source: e,
            }
        }
    })?;

    Ok(text.lines().map(str::to_string).collect())
}

pub fn load_artifact(path: &Path) -> Result<ConsolidatedOutput> {
    let bytes = fs::read(path).map_err(|e| ClarityError::SourceRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    decode_artifact_bytes(&bytes).map_err(|e| ClarityError::MalformedArtifact {
        path: path.to_path_buf(),
        source: e,
    })
}
