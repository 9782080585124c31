//! Compilation orchestrator.
//!
//! A normal read returns the artifact if it exists and otherwise compiles the
//! rule source in memory. A rebuild always compiles from source and replaces
//! the artifact. Any failure aborts the call; nothing is retried and no
//! partial output is returned.

use std::path::PathBuf;
use std::sync::Mutex;

use log::{debug, info};

use clarity_core::error::Result;
use clarity_core::filter::filter_lines;
use clarity_core::{consolidate_with, ClarityConfig, ConsolidatedOutput, ExtensionHook, RuleSet};

use crate::builder::write_artifact;
use crate::source::{load_rules, read_source_lines, RuleSource};

/// Result of a successful rebuild.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildReport {
    pub artifact: PathBuf,
    pub entries: usize,
    pub output_len: usize,
    pub bytes_written: usize,
}

pub struct RulePipeline {
    config: ClarityConfig,
    hook: ExtensionHook,
    build_lock: Mutex<()>,
}

impl RulePipeline {
    pub fn new(config: ClarityConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            hook: ExtensionHook::default(),
            build_lock: Mutex::new(()),
        })
    }

    pub fn config(&self) -> &ClarityConfig {
        &self.config
    }

    pub fn hook(&self) -> &ExtensionHook {
        &self.hook
    }

    /// Register a transformer on the rules hook. Transformers run in
    /// registration order on every compile from source.
    pub fn register<F>(&mut self, transformer: F)
    where
        F: Fn(RuleSet) -> RuleSet + Send + Sync + 'static,
    {
        self.hook.register(transformer);
    }

    /// Normal read: the artifact if present, otherwise compiled from source.
    pub fn definitions(&self) -> Result<ConsolidatedOutput> {
        self.load(false)
    }

    /// Read definitions, bypassing the artifact when `force_from_source` is set.
    /// Never writes anything.
    pub fn load(&self, force_from_source: bool) -> Result<ConsolidatedOutput> {
        let source = load_rules(&self.config, force_from_source)?;
        debug!("Definitions loaded from {}", source.describe());
        match source {
            RuleSource::Compiled(output) => Ok(output),
            RuleSource::Lines(lines) => {
                let rules = self.compile_lines(&lines);
                Ok(consolidate_with(&rules, &self.config.delimiter))
            }
        }
    }

    /// Recompile from source and atomically replace the artifact.
    ///
    /// Concurrent calls on the same pipeline are serialized.
    pub fn build(&self) -> Result<BuildReport> {
        let _guard = self
            .build_lock
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        let lines = read_source_lines(&self.config)?;

        let rules = self.compile_lines(&lines);
        let output = consolidate_with(&rules, &self.config.delimiter);
        let artifact = self.config.artifact_path();
        let bytes_written = write_artifact(&artifact, &output)?;

        info!(
            "Built '{}': {} entries, {} bytes",
            artifact.display(),
            rules.len(),
            bytes_written
        );

        Ok(BuildReport {
            artifact,
            entries: rules.len(),
            output_len: output.len(),
            bytes_written,
        })
    }

    fn compile_lines(&self, lines: &[String]) -> RuleSet {
        let filtered = filter_lines(lines, &self.config.comment_marker);
        let filtered_len = filtered.len();
        let rules = self.hook.apply(filtered);
        debug!(
            "Filtered {} lines to {} entries, {} after hook '{}'",
            lines.len(),
            filtered_len,
            rules.len(),
            self.hook.name()
        );
        rules
    }
}
