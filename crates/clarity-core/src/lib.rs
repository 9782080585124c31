//! Clarity Core Library
//!
//! This crate provides the rule model and the pure stages of the Clarity hide
//! rule pipeline: line filtering, the extension hook chain, consolidation and
//! the compiled artifact format.
//!
//! # Architecture
//!
//! Hide rules are CSS selectors kept in an editable text list. The compiler
//! crate reads that list (or a precompiled artifact), runs it through the
//! stages in this crate and hands back a single comma-joined selector string.
//!
//! # Modules
//!
//! - `types`: Rule entries, rule sets and consolidated output
//! - `filter`: Comment and blank line stripping
//! - `hook`: Ordered transformer chain applied before consolidation
//! - `consolidate`: Joining a rule set into one selector string
//! - `artifact`: Generated artifact format, encoder and loader
//! - `config`: Paths and delimiters used by the pipeline
//! - `render`: Style block for the render boundary
//! - `error`: Shared error type

pub mod artifact;
pub mod config;
pub mod consolidate;
pub mod error;
pub mod filter;
pub mod hook;
pub mod render;
pub mod types;

// Re-export commonly used types
pub use config::ClarityConfig;
pub use consolidate::{consolidate, consolidate_with, DEFAULT_DELIMITER};
pub use error::ClarityError;
pub use filter::filter_lines;
pub use hook::{ExtensionHook, RULES_HOOK};
pub use types::{ConsolidatedOutput, RuleEntry, RuleSet};
