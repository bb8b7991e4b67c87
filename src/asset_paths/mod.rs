//! Helpers for picking a chunk's output file and turning it into an emitted path.
//!
//! Selection, filesystem joining and URL resolution live in separate submodules so each
//! rule can be tested on its own; the manifest builder composes them.

mod bundle;
mod candidates;
mod filters;

pub use bundle::{DEV_SERVER_SCRIPT, join_asset_path, resolve_asset_path, resolve_with_prefix};
pub use candidates::select_candidate;
pub use filters::{CSS_EXTENSION, JS_EXTENSION, has_extension};
