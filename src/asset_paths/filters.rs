/// Script files tracked in the generated manifest.
pub const JS_EXTENSION: &str = ".js";

/// Stylesheet files tracked in the generated manifest.
pub const CSS_EXTENSION: &str = ".css";

/// Determine whether an emitted filename belongs to the tracked file type.
///
/// The comparison is an exact, case-sensitive suffix match, so `app.JS` and `app.js.map` are
/// not scripts.
pub fn has_extension(filename: &str, extension: &str) -> bool {
    filename.ends_with(extension)
}
