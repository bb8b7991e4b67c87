//! Loading the asset table from a serialised webpack stats file.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::models::AssetTable;

/// The parts of a build's stats output the manifest needs.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildStats {
  /// Chunk name to emitted files.
  #[serde(default)]
  pub assets_by_chunk_name: AssetTable,
  /// Absolute output directory of the build, when reported.
  #[serde(default)]
  pub output_path: Option<PathBuf>,
}

/// Load build stats from disk.
///
/// Accepts either a full stats object (`webpack --json`) or a bare chunk to asset mapping.
pub fn load_stats(path: &Path) -> Result<BuildStats> {
  let content = fs::read_to_string(path)
    .with_context(|| format!("stats file not found at {}", path.display()))?;
  parse_stats(&content)
    .with_context(|| format!("failed to parse stats JSON in {}", path.display()))
}

/// Parse stats from a JSON document.
pub fn parse_stats(content: &str) -> Result<BuildStats> {
  let document: Map<String, Value> =
    serde_json::from_str(content).context("stats must be a JSON object")?;

  if looks_like_full_stats(&document) {
    let stats = serde_json::from_value(Value::Object(document))?;
    return Ok(stats);
  }

  Ok(BuildStats {
    assets_by_chunk_name: AssetTable::from(document),
    ..BuildStats::default()
  })
}

/// Full stats carry the asset table as a nested object; a bare mapping never does, since its
/// values are filenames or lists of filenames.
fn looks_like_full_stats(document: &Map<String, Value>) -> bool {
  document
    .get("assetsByChunkName")
    .is_some_and(Value::is_object)
}
