#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod asset_paths;
pub mod builder;
pub mod config;
pub mod manifest;
pub mod models;
pub mod project;
pub mod stats;
pub mod writer;

pub use builder::ManifestBuilder;
pub use config::{ManifestConfig, resolve_options};
pub use models::{AssetTable, ChunkAssets, ManifestArtifacts, PathMapping};
pub use project::ManifestOptions;
pub use writer::{ManifestWriteError, write_manifest};
