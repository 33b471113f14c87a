//! Writing the generated artifact.

use std::io::{self, Write};
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::{CodegenError, Result};

/// Replace `dest` with `contents`, or leave it untouched on failure.
///
/// The data goes to a temporary file next to `dest` which is renamed over it
/// once fully written, so readers never see a half-written file.
pub fn write_atomic(dest: &Path, contents: &str) -> Result<()> {
    let write_err = |source: io::Error| CodegenError::Write {
        path: dest.to_path_buf(),
        source,
    };

    let dir = match dest.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir).map_err(write_err)?;
    tmp.write_all(contents.as_bytes()).map_err(write_err)?;
    tmp.as_file().sync_all().map_err(write_err)?;
    tmp.persist(dest).map_err(|e| write_err(e.error))?;

    log::debug!("wrote {} bytes to {}", contents.len(), dest.display());
    Ok(())
}
