use std::sync::OnceLock;

use url::{Position, Url};

/// Live-reload client script served by the development server.
pub const DEV_SERVER_SCRIPT: &str = "webpack-dev-server.js";

/// Join the configured subpath and an emitted filename.
///
/// Redundant separators, `.` and `..` segments are collapsed. The result always uses forward
/// slashes so the manifest reads the same on every platform, whatever separator the build
/// reported.
pub fn join_asset_path(base_path: &str, filename: &str) -> String {
    let joined = [base_path, filename]
        .into_iter()
        .filter(|part| !part.is_empty())
        .map(|part| part.replace('\\', "/"))
        .collect::<Vec<_>>()
        .join("/");

    normalise_segments(&joined)
}

/// Resolve `reference` against `prefix` the way a browser resolves a link against a base URI.
///
/// Absolute prefixes such as `https://cdn.example.com/` produce absolute URLs. Relative
/// prefixes (`/static/`, `static/`, `//cdn.example.com/`) are resolved with the same rules
/// and keep their relative form.
pub fn resolve_with_prefix(prefix: &str, reference: &str) -> String {
    if let Ok(base) = Url::parse(prefix) {
        return match base.join(reference) {
            Ok(resolved) => resolved.to_string(),
            Err(_) => format!("{prefix}{reference}"),
        };
    }

    if let Ok(absolute) = Url::parse(reference) {
        return absolute.to_string();
    }

    let resolved = match placeholder_base()
        .join(prefix)
        .and_then(|base| base.join(reference))
    {
        Ok(resolved) => resolved,
        Err(_) => return format!("{prefix}{reference}"),
    };

    if prefix.starts_with("//") {
        return format!("//{}", &resolved[Position::BeforeUsername..]);
    }

    let tail = &resolved[Position::BeforePath..];
    if prefix.starts_with('/') || reference.starts_with('/') {
        tail.to_string()
    } else {
        tail.trim_start_matches('/').to_string()
    }
}

/// Produce the path emitted for a chunk file: a joined path, or a URL when a prefix is set.
pub fn resolve_asset_path(base_path: &str, filename: &str, prefix: Option<&str>) -> String {
    let joined = join_asset_path(base_path, filename);
    match prefix {
        Some(prefix) => resolve_with_prefix(prefix, &joined),
        None => joined,
    }
}

fn placeholder_base() -> &'static Url {
    static BASE: OnceLock<Url> = OnceLock::new();
    BASE.get_or_init(|| Url::parse("http://x").expect("static placeholder URL parses"))
}

fn normalise_segments(path: &str) -> String {
    if path.is_empty() {
        return ".".to_string();
    }

    let absolute = path.starts_with('/');
    let trailing = path.ends_with('/');
    let mut segments: Vec<&str> = Vec::new();

    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                if segments.last().is_some_and(|last| *last != "..") {
                    segments.pop();
                } else if !absolute {
                    segments.push("..");
                }
            }
            other => segments.push(other),
        }
    }

    let mut result = segments.join("/");
    if absolute {
        result.insert(0, '/');
    } else if result.is_empty() {
        result.push('.');
    }
    if trailing && !result.ends_with('/') {
        result.push('/');
    }
    result
}
