use crate::asset_paths::filters::has_extension;
use crate::models::ChunkAssets;

/// Pick the file a chunk contributes for the given extension.
///
/// Every matching candidate is visited in the order the build listed them and each one
/// replaces the previous pick, so when a chunk emitted several files of the same type the
/// last one wins. Returns `None` when nothing matches.
pub fn select_candidate<'a>(assets: &'a ChunkAssets, extension: &str) -> Option<&'a str> {
    assets
        .candidates()
        .into_iter()
        .filter(|filename| has_extension(filename, extension))
        .last()
}
