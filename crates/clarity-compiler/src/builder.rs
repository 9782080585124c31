//! Artifact writer.
//!
//! The artifact is written to a temp file in the target directory, synced,
//! then renamed over the old one. Readers see either the previous artifact or
//! the new one, never a partial file.

use std::fs;
use std::io::Write;
use std::path::Path;

use log::debug;
use tempfile::NamedTempFile;

use clarity_core::artifact::encode_artifact;
use clarity_core::error::{ClarityError, Result};
use clarity_core::ConsolidatedOutput;

/// Encode `output` and atomically replace the artifact at `path`.
///
/// Returns the number of bytes written.
pub fn write_artifact(path: &Path, output: &ConsolidatedOutput) -> Result<usize> {
    let text = encode_artifact(output);
    write_atomic(path, text.as_bytes())?;
    debug!("Wrote {} bytes to '{}'", text.len(), path.display());
    Ok(text.len())
}

fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    let write_err = |source| ClarityError::FilesystemWrite {
        path: path.to_path_buf(),
        source,
    };

    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent).map_err(write_err)?;

    let mut temp = NamedTempFile::new_in(parent).map_err(write_err)?;
    temp.write_all(bytes).map_err(write_err)?;
    temp.as_file().sync_all().map_err(write_err)?;
    temp.persist(path).map_err(|e| write_err(e.error))?;

    Ok(())
}
