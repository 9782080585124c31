//! Artifact layout and encoder.
//!
//! ```text
//! // @generated This file is automatically generated, do not update manually! Use 'clarity build' to generate.
//! "a.foo, b.bar"
//! ```

use proc_macro2::Literal;

use crate::types::ConsolidatedOutput;

/// Marker every artifact must carry in its header comment.
pub const GENERATED_MARKER: &str = "@generated";

/// Command that regenerates the artifact.
pub const REBUILD_COMMAND: &str = "clarity build";

/// Line comment prefix for the header.
pub const COMMENT_PREFIX: &str = "//";

/// The header comment line, without trailing newline.
pub fn header_line() -> String {
    format!(
        "{COMMENT_PREFIX} {GENERATED_MARKER} This file is automatically generated, \
         do not update manually! Use '{REBUILD_COMMAND}' to generate."
    )
}

/// Render the complete artifact text for `output`.
pub fn encode_artifact(output: &ConsolidatedOutput) -> String {
    let literal = encode_literal(output.as_str());
    let mut text = String::with_capacity(literal.len() + 128);
    text.push_str(&header_line());
    text.push('\n');
    text.push_str(&literal);
    text.push('\n');
    text
}

/// Quote `value` as a Rust string literal.
pub fn encode_literal(value: &str) -> String {
    Literal::string(value).to_string()
}
