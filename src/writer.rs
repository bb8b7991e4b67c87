//! Persist the rendered manifest into the build output directory.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Errors that can occur while writing the manifest file.
#[derive(Debug)]
pub enum ManifestWriteError {
  /// The output directory was missing and could not be created.
  CreateDir {
    /// Directory that could not be created.
    path: PathBuf,
    /// Source I/O error.
    source: std::io::Error,
  },
  /// The manifest file could not be written.
  Write {
    /// File that could not be written.
    path: PathBuf,
    /// Source I/O error.
    source: std::io::Error,
  },
}

/// Write `contents` to `output_dir/file_name`, replacing any previous manifest.
///
/// Only the last path component of `output_dir` is created; missing parents are reported as
/// [`ManifestWriteError::CreateDir`]. An existing directory is fine. The file is written in
/// place, not via a temporary file.
pub fn write_manifest(
  output_dir: &Path,
  file_name: &str,
  contents: &str,
) -> Result<PathBuf, ManifestWriteError> {
  ensure_output_dir(output_dir)?;

  let target = output_dir.join(file_name);
  fs::write(&target, contents).map_err(|source| ManifestWriteError::Write {
    path: target.clone(),
    source,
  })?;
  Ok(target)
}

fn ensure_output_dir(dir: &Path) -> Result<(), ManifestWriteError> {
  match fs::create_dir(dir) {
    Ok(()) => Ok(()),
    Err(err) if err.kind() == ErrorKind::AlreadyExists => Ok(()),
    Err(err) => Err(ManifestWriteError::CreateDir {
      path: dir.to_path_buf(),
      source: err,
    }),
  }
}

impl std::fmt::Display for ManifestWriteError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::CreateDir { path, source } => {
        write!(f, "failed to create {}: {}", path.display(), source)
      }
      Self::Write { path, source } => {
        write!(f, "failed to write {}: {}", path.display(), source)
      }
    }
  }
}

impl std::error::Error for ManifestWriteError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      Self::CreateDir { source, .. } => Some(source),
      Self::Write { source, .. } => Some(source),
    }
  }
}
