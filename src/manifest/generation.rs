//! Build the per-extension chunk mappings from a build's asset table.

use crate::asset_paths::{
  CSS_EXTENSION, DEV_SERVER_SCRIPT, JS_EXTENSION, resolve_asset_path, resolve_with_prefix,
  select_candidate,
};
use crate::models::{AssetTable, ManifestGenerationResult, PathMapping};
use crate::project::ManifestOptions;

/// Key under which the live-reload client script is added to the script mapping.
pub const DEV_SERVER_KEY: &str = "webpack-dev-server";

/// Map every chunk that emitted a file ending in `extension` to that file's resolved path.
///
/// Chunks without a matching file are left out. When a chunk emitted several matching files
/// the last one listed is used.
pub fn build_mapping(
  table: &AssetTable,
  extension: &str,
  base_path: &str,
  prefix: Option<&str>,
) -> PathMapping {
  let mut mapping = PathMapping::new();

  for (name, assets) in table.iter() {
    let Some(filename) = select_candidate(assets, extension) else {
      continue;
    };
    mapping.insert(name, resolve_asset_path(base_path, filename, prefix));
  }

  mapping
}

/// Script mapping, including the development server client when enabled.
pub fn build_js_files(table: &AssetTable, options: &ManifestOptions) -> PathMapping {
  let prefix = options.effective_prefix();
  let mut mapping = build_mapping(table, JS_EXTENSION, &options.path, prefix);

  if options.dev_server {
    mapping.insert(
      DEV_SERVER_KEY,
      resolve_with_prefix(prefix.unwrap_or_default(), DEV_SERVER_SCRIPT),
    );
  }

  mapping
}

/// Stylesheet mapping.
pub fn build_css_files(table: &AssetTable, options: &ManifestOptions) -> PathMapping {
  build_mapping(
    table,
    CSS_EXTENSION,
    &options.path,
    options.effective_prefix(),
  )
}

/// Build both mappings for one completed build.
pub fn generate_manifest(table: &AssetTable, options: &ManifestOptions) -> ManifestGenerationResult {
  ManifestGenerationResult {
    js_files: build_js_files(table, options),
    css_files: build_css_files(table, options),
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn table(json: &str) -> AssetTable {
    serde_json::from_str(json).unwrap()
  }

  fn options() -> ManifestOptions {
    ManifestOptions::new("build")
  }

  #[test]
  fn splits_scripts_and_stylesheets() {
    let table = table(r#"{"main":["main.1a.js","main.1a.css"],"admin":"admin.2b.js","theme":"theme.3c.css"}"#);
    let result = generate_manifest(&table, &options());

    let js: Vec<(&str, &str)> = result.js_files.iter().collect();
    assert_eq!(js, vec![("main", "main.1a.js"), ("admin", "admin.2b.js")]);

    let css: Vec<(&str, &str)> = result.css_files.iter().collect();
    assert_eq!(css, vec![("main", "main.1a.css"), ("theme", "theme.3c.css")]);
  }

  #[test]
  fn omits_chunks_without_tracked_files() {
    let table = table(r#"{"fonts":["font.woff2","font.ttf"],"logo":"logo.svg","broken":{"x":1}}"#);
    let result = generate_manifest(&table, &options());

    assert!(result.js_files.is_empty());
    assert!(result.css_files.is_empty());
  }

  #[test]
  fn joins_subpath_without_prefix() {
    let table = table(r#"{"app":"app.js"}"#);
    let mapping = build_mapping(&table, ".js", "build", None);
    assert_eq!(mapping.get("app"), Some("build/app.js"));
  }

  #[test]
  fn resolves_urls_with_prefix() {
    let table = table(r#"{"app":"app.js"}"#);
    let mapping = build_mapping(&table, ".js", "", Some("https://cdn.example.com/"));
    assert_eq!(mapping.get("app"), Some("https://cdn.example.com/app.js"));
  }

  #[test]
  fn prefix_applies_to_every_entry() {
    let table = table(r#"{"a":"a.js","b":["b.css","b.js"],"c":"c.js"}"#);
    let mut options = options();
    options.path = "dist".into();
    options.path_prefix = Some("https://cdn.example.com/".into());

    let js = build_js_files(&table, &options);
    assert_eq!(js.len(), 3);
    assert!(
      js.iter()
        .all(|(_, path)| path.starts_with("https://cdn.example.com/dist/"))
    );
  }

  #[test]
  fn dev_server_entry_added_regardless_of_assets() {
    let mut options = options();
    options.dev_server = true;
    options.path = "ignored".into();
    options.path_prefix = Some("http://localhost:8080/".into());

    let js = build_js_files(&AssetTable::default(), &options);
    assert_eq!(js.len(), 1);
    assert_eq!(
      js.get(DEV_SERVER_KEY),
      Some("http://localhost:8080/webpack-dev-server.js")
    );

    let css = build_css_files(&AssetTable::default(), &options);
    assert!(css.is_empty());
  }

  #[test]
  fn dev_server_entry_without_prefix_is_bare_script() {
    let mut options = options();
    options.dev_server = true;

    let js = build_js_files(&table(r#"{"main":"main.js"}"#), &options);
    let entries: Vec<(&str, &str)> = js.iter().collect();
    assert_eq!(entries, vec![
      ("main", "main.js"),
      (DEV_SERVER_KEY, "webpack-dev-server.js"),
    ]);
  }
}
