// webk-build: Web K build configuration composer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::fs::{self, File};
use std::io;
use std::path::Path;
use tempfile::NamedTempFile;

use crate::error::FsError;

/// Result of [`copy_file_if_absent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    /// `dst` did not exist and now holds a byte-for-byte copy of `src`.
    Copied,
    /// `dst` already existed and was left untouched.
    Kept,
}

/// Copies `src` to `dst` unless `dst` already exists.
///
/// The bytes go to a temporary file next to `dst`, which is moved into place
/// only after a complete, synced copy. A failed copy leaves no `dst` behind,
/// and a `dst` that appears in the meantime is never replaced. Parent
/// directories of `dst` are created as needed.
///
/// # Example
/// ```no_run
/// use webk_build::utility::fs::copy::{copy_file_if_absent, CopyOutcome};
/// use std::path::Path;
///
/// let outcome = copy_file_if_absent(Path::new(".env.local.example"), Path::new(".env.local"))?;
/// assert!(matches!(outcome, CopyOutcome::Copied | CopyOutcome::Kept));
/// # Ok::<(), webk_build::error::FsError>(())
/// ```
///
/// # Errors
///
/// Returns [`FsError::NotFound`] when `dst` is missing and `src` does not
/// exist, and [`FsError::IoError`] for any other I/O failure.
pub fn copy_file_if_absent(src: &Path, dst: &Path) -> Result<CopyOutcome, FsError> {
    if dst.exists() {
        return Ok(CopyOutcome::Kept);
    }

    let mut reader = match File::open(src) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(FsError::NotFound(src.display().to_string()));
        }
        Err(source) => return Err(io_error(src, source)),
    };

    let parent = match dst.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent).map_err(|source| io_error(parent, source))?;

    let mut staged = NamedTempFile::new_in(parent).map_err(|source| io_error(parent, source))?;
    io::copy(&mut reader, staged.as_file_mut()).map_err(|source| io_error(src, source))?;
    staged
        .as_file()
        .sync_all()
        .map_err(|source| io_error(staged.path(), source))?;

    if let Err(e) = staged.persist_noclobber(dst) {
        if e.error.kind() == io::ErrorKind::AlreadyExists {
            return Ok(CopyOutcome::Kept);
        }
        return Err(io_error(dst, e.error));
    }

    Ok(CopyOutcome::Copied)
}

fn io_error(path: &Path, source: io::Error) -> FsError {
    FsError::IoError {
        path: path.display().to_string(),
        source,
    }
}
