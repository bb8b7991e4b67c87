//! Manifest build orchestrator: asset table in, rendered and written PHP class out.

use crate::manifest::{generate_manifest, render_php_class};
use crate::models::{AssetTable, ManifestArtifacts, ManifestGenerationResult};
use crate::project::ManifestOptions;
use crate::writer::{ManifestWriteError, write_manifest};

/// Name of the static member holding script paths.
pub const JS_SECTION: &str = "jsFiles";

/// Name of the static member holding stylesheet paths.
pub const CSS_SECTION: &str = "cssFiles";

/// High-level helper running one build's asset table through the manifest pipeline.
pub struct ManifestBuilder {
  options: ManifestOptions,
}

impl ManifestBuilder {
  /// Create a builder for the provided options.
  pub fn new(options: ManifestOptions) -> Self {
    Self { options }
  }

  /// Options this builder was created with.
  pub fn options(&self) -> &ManifestOptions {
    &self.options
  }

  /// Build the mappings and render the PHP class without touching the filesystem.
  pub fn build(&self, table: &AssetTable) -> ManifestArtifacts {
    let files = generate_manifest(table, &self.options);
    let php_source = self.render(&files);

    ManifestArtifacts {
      files,
      php_source,
      output_dir: self.options.output_dir.clone(),
      file_name: self.options.file_name(),
    }
  }

  /// Build the manifest and write it to the output directory.
  pub fn emit(&self, table: &AssetTable) -> Result<ManifestArtifacts, ManifestWriteError> {
    let artifacts = self.build(table);
    write_manifest(
      &artifacts.output_dir,
      &artifacts.file_name,
      &artifacts.php_source,
    )?;
    Ok(artifacts)
  }

  fn render(&self, files: &ManifestGenerationResult) -> String {
    render_php_class(
      &self.options.class_name,
      &[(JS_SECTION, &files.js_files), (CSS_SECTION, &files.css_files)],
    )
  }
}
