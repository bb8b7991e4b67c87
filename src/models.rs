//! Data structures passed between the manifest builder, renderer and writer.

use std::path::PathBuf;

use serde::Deserialize;
use serde_json::{Map, Value};

/// Files a single chunk produced, exactly as reported by the build.
#[derive(Debug, Clone, PartialEq)]
pub enum ChunkAssets {
  /// A chunk that emitted a single file.
  Single(String),
  /// A chunk that emitted several files, in the order the build listed them.
  Multiple(Vec<Value>),
  /// Any other shape; contributes no candidates.
  Unrecognised(Value),
}

impl ChunkAssets {
  /// Filenames to consider for this chunk, in reported order.
  ///
  /// Non-string list members are dropped rather than treated as errors.
  pub fn candidates(&self) -> Vec<&str> {
    match self {
      Self::Single(filename) => vec![filename.as_str()],
      Self::Multiple(values) => values.iter().filter_map(Value::as_str).collect(),
      Self::Unrecognised(_) => Vec::new(),
    }
  }
}

impl From<Value> for ChunkAssets {
  fn from(value: Value) -> Self {
    match value {
      Value::String(filename) => Self::Single(filename),
      Value::Array(values) => Self::Multiple(values),
      other => Self::Unrecognised(other),
    }
  }
}

/// Chunk name to emitted files, in the order the build reported them.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "Map<String, Value>")]
pub struct AssetTable {
  chunks: Vec<(String, ChunkAssets)>,
}

impl AssetTable {
  /// Iterate over chunks in reported order.
  pub fn iter(&self) -> impl Iterator<Item = (&str, &ChunkAssets)> {
    self.chunks.iter().map(|(name, assets)| (name.as_str(), assets))
  }

  /// Number of chunks in the table.
  pub fn len(&self) -> usize {
    self.chunks.len()
  }

  /// Returns `true` when the build reported no chunks.
  pub fn is_empty(&self) -> bool {
    self.chunks.is_empty()
  }
}

impl From<Map<String, Value>> for AssetTable {
  fn from(map: Map<String, Value>) -> Self {
    map
      .into_iter()
      .map(|(name, value)| (name, ChunkAssets::from(value)))
      .collect()
  }
}

impl FromIterator<(String, ChunkAssets)> for AssetTable {
  fn from_iter<I: IntoIterator<Item = (String, ChunkAssets)>>(iter: I) -> Self {
    Self {
      chunks: iter.into_iter().collect(),
    }
  }
}

/// Chunk name to a single resolved path or URL.
///
/// Keys keep first-insertion order; inserting an existing key overwrites its value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathMapping {
  entries: Vec<(String, String)>,
}

impl PathMapping {
  /// Create an empty mapping.
  pub fn new() -> Self {
    Self::default()
  }

  /// Assign `path` to `name`, replacing any previous value.
  pub fn insert(&mut self, name: impl Into<String>, path: impl Into<String>) {
    let name = name.into();
    let path = path.into();
    match self.entries.iter_mut().find(|(existing, _)| *existing == name) {
      Some((_, value)) => *value = path,
      None => self.entries.push((name, path)),
    }
  }

  /// Look up the resolved path for a chunk.
  pub fn get(&self, name: &str) -> Option<&str> {
    self
      .entries
      .iter()
      .find(|(existing, _)| existing == name)
      .map(|(_, path)| path.as_str())
  }

  /// Iterate over entries in insertion order.
  pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
    self
      .entries
      .iter()
      .map(|(name, path)| (name.as_str(), path.as_str()))
  }

  /// Number of entries.
  pub fn len(&self) -> usize {
    self.entries.len()
  }

  /// Returns `true` when no chunk produced a matching file.
  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }
}

/// Script and stylesheet mappings produced for one build.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ManifestGenerationResult {
  /// Chunk name to script path.
  pub js_files: PathMapping,
  /// Chunk name to stylesheet path.
  pub css_files: PathMapping,
}

/// Rendered manifest ready to be written.
#[derive(Debug, Clone)]
pub struct ManifestArtifacts {
  /// Mappings the class was rendered from.
  pub files: ManifestGenerationResult,
  /// PHP source of the generated class.
  pub php_source: String,
  /// Directory the manifest belongs in.
  pub output_dir: PathBuf,
  /// File name of the manifest inside `output_dir`, including the `.php` extension.
  pub file_name: String,
}

impl ManifestArtifacts {
  /// Full path of the manifest file.
  pub fn output_path(&self) -> PathBuf {
    self.output_dir.join(&self.file_name)
  }
}
