//! Immutable options describing where and how a manifest is produced.

use std::path::PathBuf;

/// Default base name of the generated file.
pub const DEFAULT_OUTPUT: &str = "assets-manifest";

/// Default name of the generated PHP class.
pub const DEFAULT_CLASS_NAME: &str = "WebpackBuiltFiles";

/// Extension appended to the output base name.
pub const MANIFEST_EXTENSION: &str = ".php";

/// Options resolved once per run and passed explicitly through the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestOptions {
  /// Directory the manifest is written into.
  pub output_dir: PathBuf,
  /// Subpath joined in front of every emitted filename.
  pub path: String,
  /// Base URL used to turn joined paths into absolute URLs.
  pub path_prefix: Option<String>,
  /// Public path that replaces `path_prefix` when set.
  pub public_path: Option<String>,
  /// Base name of the generated file, without extension.
  pub output: String,
  /// Name of the generated PHP class.
  pub class_name: String,
  /// Add the live-reload client script to the script mapping.
  pub dev_server: bool,
}

impl ManifestOptions {
  /// Options with every optional setting at its default.
  pub fn new(output_dir: impl Into<PathBuf>) -> Self {
    Self {
      output_dir: output_dir.into(),
      path: String::new(),
      path_prefix: None,
      public_path: None,
      output: DEFAULT_OUTPUT.to_string(),
      class_name: DEFAULT_CLASS_NAME.to_string(),
      dev_server: false,
    }
  }

  /// Prefix applied to every resolved path, if any.
  ///
  /// Empty strings count as unset.
  pub fn effective_prefix(&self) -> Option<&str> {
    self
      .public_path
      .as_deref()
      .filter(|value| !value.is_empty())
      .or_else(|| self.path_prefix.as_deref().filter(|value| !value.is_empty()))
  }

  /// File name of the manifest, including extension.
  pub fn file_name(&self) -> String {
    format!("{}{}", self.output, MANIFEST_EXTENSION)
  }
}
