//! Configuration file loader for manifest generation options.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::project::{DEFAULT_CLASS_NAME, DEFAULT_OUTPUT, ManifestOptions};
use crate::stats::BuildStats;

/// File searched for when no configuration path is given explicitly.
pub const DEFAULT_CONFIG_FILE: &str = "php-manifest.config.json";

/// Discoverable configuration; every field is optional and unset fields fall back to defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ManifestConfig {
  /// Directory the manifest is written into. Defaults to the build output directory.
  pub output_dir: Option<PathBuf>,
  /// Subpath joined in front of every emitted filename.
  pub path: Option<String>,
  /// Base URL used to emit absolute URLs instead of joined paths.
  pub path_prefix: Option<String>,
  /// Public path that takes precedence over `path_prefix`.
  pub public_path: Option<String>,
  /// Base name of the generated file; `.php` is appended.
  pub output: Option<String>,
  /// Name of the generated PHP class.
  pub php_class_name: Option<String>,
  /// Add the development server client script to the script mapping.
  pub dev_server: Option<bool>,
}

impl ManifestConfig {
  /// Attempt to load configuration from the provided directory.
  ///
  /// A missing or unreadable file yields the default configuration so a bare invocation
  /// still works.
  pub fn discover(dir: &Path) -> Self {
    let candidate = dir.join(DEFAULT_CONFIG_FILE);
    Self::from_path(&candidate).unwrap_or_default()
  }

  /// Read configuration from a specific JSON file.
  pub fn from_path(path: &Path) -> Result<Self> {
    let content = fs::read_to_string(path)
      .with_context(|| format!("config not found at {}", path.display()))?;
    serde_json::from_str(&content)
      .with_context(|| format!("failed to parse config JSON in {}", path.display()))
  }

  /// Overlay `other` on top of this configuration; fields set in `other` win.
  pub fn merge(self, other: ManifestConfig) -> Self {
    Self {
      output_dir: other.output_dir.or(self.output_dir),
      path: other.path.or(self.path),
      path_prefix: other.path_prefix.or(self.path_prefix),
      public_path: other.public_path.or(self.public_path),
      output: other.output.or(self.output),
      php_class_name: other.php_class_name.or(self.php_class_name),
      dev_server: other.dev_server.or(self.dev_server),
    }
  }

  /// Resolve into immutable options, using `build_output_dir` when no output directory is set.
  pub fn into_options(self, build_output_dir: &Path) -> ManifestOptions {
    ManifestOptions {
      output_dir: self
        .output_dir
        .unwrap_or_else(|| build_output_dir.to_path_buf()),
      path: self.path.unwrap_or_default(),
      path_prefix: self.path_prefix,
      public_path: self.public_path,
      output: self.output.unwrap_or_else(|| DEFAULT_OUTPUT.to_string()),
      class_name: self
        .php_class_name
        .unwrap_or_else(|| DEFAULT_CLASS_NAME.to_string()),
      dev_server: self.dev_server.unwrap_or(false),
    }
  }
}

/// Resolve the options for one run.
///
/// Precedence, highest first: `overrides` (command-line flags), `file_config`, the build's
/// reported `outputPath`, the directory holding the stats file.
pub fn resolve_options(
  stats: &BuildStats,
  stats_path: &Path,
  file_config: ManifestConfig,
  overrides: ManifestConfig,
) -> ManifestOptions {
  let build_output_dir = stats
    .output_path
    .clone()
    .unwrap_or_else(|| stats_dir(stats_path));

  file_config.merge(overrides).into_options(&build_output_dir)
}

fn stats_dir(stats_path: &Path) -> PathBuf {
  match stats_path.parent() {
    Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
    _ => PathBuf::from("."),
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use tempfile::tempdir;

  #[test]
  fn defaults_resolve_to_build_output() {
    let options = ManifestConfig::default().into_options(Path::new("public/build"));

    assert_eq!(options, ManifestOptions::new("public/build"));
  }

  #[test]
  fn parses_camel_case_keys() {
    let config: ManifestConfig = serde_json::from_str(
      r#"{
        "outputDir": "var/manifest",
        "path": "build",
        "pathPrefix": "https://cdn.example.com/",
        "output": "assets",
        "phpClassName": "BuiltAssets",
        "devServer": true
      }"#,
    )
    .unwrap();

    let options = config.into_options(Path::new("ignored"));
    assert_eq!(options.output_dir, PathBuf::from("var/manifest"));
    assert_eq!(options.path, "build");
    assert_eq!(options.path_prefix.as_deref(), Some("https://cdn.example.com/"));
    assert_eq!(options.file_name(), "assets.php");
    assert_eq!(options.class_name, "BuiltAssets");
    assert!(options.dev_server);
  }

  #[test]
  fn merge_prefers_overrides() {
    let base = ManifestConfig {
      path: Some("build".into()),
      output: Some("from-file".into()),
      dev_server: Some(true),
      ..ManifestConfig::default()
    };
    let overrides = ManifestConfig {
      output: Some("from-cli".into()),
      ..ManifestConfig::default()
    };

    let merged = base.merge(overrides);
    assert_eq!(merged.path.as_deref(), Some("build"));
    assert_eq!(merged.output.as_deref(), Some("from-cli"));
    assert_eq!(merged.dev_server, Some(true));
  }

  #[test]
  fn discover_falls_back_to_defaults() {
    let temp = tempdir().expect("failed to create temp dir");
    assert_eq!(ManifestConfig::discover(temp.path()), ManifestConfig::default());

    fs::write(temp.path().join(DEFAULT_CONFIG_FILE), "{ not json").unwrap();
    assert_eq!(ManifestConfig::discover(temp.path()), ManifestConfig::default());
  }

  #[test]
  fn discover_reads_config_file() {
    let temp = tempdir().expect("failed to create temp dir");
    fs::write(
      temp.path().join(DEFAULT_CONFIG_FILE),
      r#"{"phpClassName": "Assets"}"#,
    )
    .unwrap();

    let config = ManifestConfig::discover(temp.path());
    assert_eq!(config.php_class_name.as_deref(), Some("Assets"));
  }

  fn stats_with_output(output_path: Option<&str>) -> BuildStats {
    BuildStats {
      output_path: output_path.map(PathBuf::from),
      ..BuildStats::default()
    }
  }

  #[test]
  fn resolve_prefers_command_line_output_dir() {
    let file_config = ManifestConfig {
      output_dir: Some("from-config".into()),
      ..ManifestConfig::default()
    };
    let overrides = ManifestConfig {
      output_dir: Some("from-flag".into()),
      ..ManifestConfig::default()
    };

    let options = resolve_options(
      &stats_with_output(Some("/srv/build")),
      Path::new("dist/stats.json"),
      file_config,
      overrides,
    );
    assert_eq!(options.output_dir, PathBuf::from("from-flag"));
  }

  #[test]
  fn resolve_uses_config_file_over_stats() {
    let file_config = ManifestConfig {
      output_dir: Some("from-config".into()),
      php_class_name: Some("Assets".into()),
      ..ManifestConfig::default()
    };

    let options = resolve_options(
      &stats_with_output(Some("/srv/build")),
      Path::new("dist/stats.json"),
      file_config,
      ManifestConfig::default(),
    );
    assert_eq!(options.output_dir, PathBuf::from("from-config"));
    assert_eq!(options.class_name, "Assets");
  }

  #[test]
  fn resolve_falls_back_to_reported_output_path() {
    let options = resolve_options(
      &stats_with_output(Some("/srv/build")),
      Path::new("dist/stats.json"),
      ManifestConfig::default(),
      ManifestConfig::default(),
    );
    assert_eq!(options.output_dir, PathBuf::from("/srv/build"));
  }

  #[test]
  fn resolve_falls_back_to_stats_directory() {
    let options = resolve_options(
      &stats_with_output(None),
      Path::new("dist/stats.json"),
      ManifestConfig::default(),
      ManifestConfig::default(),
    );
    assert_eq!(options.output_dir, PathBuf::from("dist"));
  }

  #[test]
  fn resolve_uses_working_directory_for_bare_stats_name() {
    let options = resolve_options(
      &stats_with_output(None),
      Path::new("stats.json"),
      ManifestConfig::default(),
      ManifestConfig::default(),
    );
    assert_eq!(options.output_dir, PathBuf::from("."));
  }

  #[test]
  fn resolve_lets_flag_disable_config_dev_server() {
    let file_config = ManifestConfig {
      dev_server: Some(true),
      ..ManifestConfig::default()
    };
    let overrides = ManifestConfig {
      dev_server: Some(false),
      ..ManifestConfig::default()
    };

    let options = resolve_options(
      &stats_with_output(None),
      Path::new("stats.json"),
      file_config.clone(),
      overrides,
    );
    assert!(!options.dev_server);

    let options = resolve_options(
      &stats_with_output(None),
      Path::new("stats.json"),
      file_config,
      ManifestConfig::default(),
    );
    assert!(options.dev_server);
  }

  #[test]
  fn from_path_reports_missing_file() {
    let temp = tempdir().expect("failed to create temp dir");
    let err = ManifestConfig::from_path(&temp.path().join("missing.json")).unwrap_err();
    assert!(err.to_string().contains("config not found"));
  }
}
