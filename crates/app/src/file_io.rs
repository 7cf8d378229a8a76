//! Reading and writing documents.
//!
//! Files are read and written verbatim as UTF-8. Saving goes through a
//! uniquely named temporary file beside the real target (symlinks are
//! followed) that is renamed over it, so a failed save leaves the existing
//! file untouched. The target's permissions carry over to the new file.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use thiserror::Error;

/// File operation error
#[derive(Debug, Error)]
pub enum FileError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl FileError {
    /// Path the failed operation was working on
    pub fn path(&self) -> &Path {
        match self {
            FileError::Read { path, .. } | FileError::Write { path, .. } => path,
        }
    }
}

/// Read the whole file as text.
///
/// Content that is not valid UTF-8 is a read error.
pub fn read_text(path: &Path) -> Result<String, FileError> {
    fs::read_to_string(path).map_err(|source| FileError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Write `text` to `path`, replacing any existing content
pub fn write_text(path: &Path, text: &str) -> Result<(), FileError> {
    let to_error = |source| FileError::Write {
        path: path.to_path_buf(),
        source,
    };

    let target = resolve_target(path);
    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    // Dropping the temp file on any early return removes it
    let mut tmp = NamedTempFile::new_in(dir).map_err(to_error)?;
    tmp.write_all(text.as_bytes()).map_err(to_error)?;
    tmp.as_file().sync_all().map_err(to_error)?;

    if let Ok(metadata) = fs::metadata(&target) {
        tmp.as_file()
            .set_permissions(metadata.permissions())
            .map_err(to_error)?;
    }

    tmp.persist(&target).map_err(|e| to_error(e.error))?;
    Ok(())
}

/// Final file behind `path`, following symlinks.
///
/// A path that does not exist yet is written as given.
fn resolve_target(path: &Path) -> PathBuf {
    fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}

/// File name for titles and status messages
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
