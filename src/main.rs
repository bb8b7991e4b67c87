use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use webpack_php_manifest::ManifestBuilder;
use webpack_php_manifest::config::{ManifestConfig, resolve_options};
use webpack_php_manifest::stats::load_stats;

/// Generate a PHP class listing the scripts and stylesheets of a finished webpack build.
#[derive(Debug, Parser)]
#[command(name = "webpack-php-manifest", version, about)]
struct Cli {
  /// Stats JSON written by the build (`webpack --json`), or a bare chunk to asset mapping.
  stats: PathBuf,

  /// Configuration file; defaults to php-manifest.config.json in the working directory.
  #[arg(long)]
  config: Option<PathBuf>,

  /// Directory to write the manifest into [default: the build output directory].
  #[arg(long)]
  output_dir: Option<PathBuf>,

  /// Subpath joined in front of every emitted filename.
  #[arg(long)]
  path: Option<String>,

  /// Base URL; emitted paths become absolute URLs.
  #[arg(long)]
  path_prefix: Option<String>,

  /// Public path that takes precedence over --path-prefix.
  #[arg(long)]
  public_path: Option<String>,

  /// Base name of the generated file, without the .php extension.
  #[arg(long)]
  output: Option<String>,

  /// Name of the generated PHP class.
  #[arg(long)]
  php_class_name: Option<String>,

  /// Add the webpack-dev-server client script to the script mapping; `=false` turns it off.
  #[arg(
    long,
    value_name = "BOOL",
    num_args = 0..=1,
    require_equals = true,
    default_missing_value = "true"
  )]
  dev_server: Option<bool>,

  /// Print the generated class instead of writing it.
  #[arg(long)]
  stdout: bool,
}

impl Cli {
  fn overrides(&self) -> ManifestConfig {
    ManifestConfig {
      output_dir: self.output_dir.clone(),
      path: self.path.clone(),
      path_prefix: self.path_prefix.clone(),
      public_path: self.public_path.clone(),
      output: self.output.clone(),
      php_class_name: self.php_class_name.clone(),
      dev_server: self.dev_server,
    }
  }

  fn file_config(&self) -> Result<ManifestConfig> {
    match &self.config {
      Some(path) => ManifestConfig::from_path(path),
      None => {
        let cwd = std::env::current_dir().context("failed to read working directory")?;
        Ok(ManifestConfig::discover(&cwd))
      }
    }
  }
}

fn main() -> Result<()> {
  run(&Cli::parse())
}

fn run(cli: &Cli) -> Result<()> {
  let stats = load_stats(&cli.stats)?;
  let options = resolve_options(&stats, &cli.stats, cli.file_config()?, cli.overrides());
  let builder = ManifestBuilder::new(options);

  if cli.stdout {
    let artifacts = builder.build(&stats.assets_by_chunk_name);
    print!("{}", artifacts.php_source);
    return Ok(());
  }

  let artifacts = builder
    .emit(&stats.assets_by_chunk_name)
    .context("failed to write PHP manifest")?;

  eprintln!(
    "wrote {} script and {} stylesheet entries to {}",
    artifacts.files.js_files.len(),
    artifacts.files.css_files.len(),
    artifacts.output_path().display()
  );
  Ok(())
}
