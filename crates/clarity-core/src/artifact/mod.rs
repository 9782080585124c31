//! Compiled artifact format and loader
//!
//! The artifact is a Rust source fragment holding one string literal, so a
//! build can pull it in with `include!` while the runtime loader decodes the
//! literal directly.

mod format;
mod loader;

pub use format::*;
pub use loader::*;
