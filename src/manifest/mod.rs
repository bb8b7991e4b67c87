//! Manifest generation split into mapping construction and PHP rendering.

mod generation;
mod render;

pub use generation::{
  DEV_SERVER_KEY, build_css_files, build_js_files, build_mapping, generate_manifest,
};
pub use render::{GENERATOR_NAME, render_php_class};
