//! Clarity Rule Compiler
//!
//! This crate reads the editable hide rule list (or its precompiled artifact),
//! runs it through the pipeline stages from `clarity-core`, and writes the
//! artifact on request.

pub mod builder;
pub mod pipeline;
pub mod source;

pub use builder::write_artifact;
pub use pipeline::{BuildReport, RulePipeline};
pub use source::{load_artifact, load_rules, read_source_lines, RuleSource};
