//! Module URL resolution
//!
//! Logical asset names are slash-separated and relative to the storage
//! root. Module names are resolved against the configured base URL.

use std::path::{Component, Path, PathBuf};

/// Lexically normalize a slash-separated path.
///
/// Collapses `.` segments, duplicate slashes and `segment/..` pairs.
/// Leading `..` segments that cannot be collapsed are kept. An empty
/// result becomes `"."`.
pub fn normalize(path: &str) -> String {
    let absolute = path.starts_with('/');
    let mut parts: Vec<&str> = Vec::new();
    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => match parts.last() {
                Some(&last) if last != ".." => {
                    parts.pop();
                }
                _ if absolute => {}
                _ => parts.push(".."),
            },
            other => parts.push(other),
        }
    }
    let joined = parts.join("/");
    match (absolute, joined.is_empty()) {
        (true, _) => format!("/{}", joined),
        (false, true) => ".".to_string(),
        (false, false) => joined,
    }
}

/// Join two slash-separated paths; an absolute `name` replaces `base`.
pub fn join(base: &str, name: &str) -> String {
    if name.starts_with('/') || base.is_empty() {
        name.to_string()
    } else if base.ends_with('/') {
        format!("{}{}", base, name)
    } else {
        format!("{}/{}", base, name)
    }
}

/// Resolve `name` relative to the base URL.
pub fn resolve_require_url(base_url: &str, name: &str) -> String {
    normalize(&join(base_url, name))
}

/// Resolve a module name, appending `.js` when it has another extension
/// or none at all.
pub fn resolve_require_module(base_url: &str, name: &str) -> String {
    if has_js_extension(name) {
        resolve_require_url(base_url, name)
    } else {
        resolve_require_url(base_url, &format!("{}.js", name))
    }
}

fn has_js_extension(name: &str) -> bool {
    let file = name.rsplit('/').next().unwrap_or(name);
    match file.rfind('.') {
        Some(0) | None => false,
        Some(idx) => file[idx..].eq_ignore_ascii_case(".js"),
    }
}

/// True when a normalized relative name climbs above its root.
pub fn escapes_root(name: &str) -> bool {
    name == ".." || name.starts_with("../")
}

/// Convert a logical name into a path below `root`.
pub fn logical_to_path(root: &Path, name: &str) -> PathBuf {
    name.split('/')
        .filter(|s| !s.is_empty())
        .fold(root.to_path_buf(), |acc, segment| acc.join(segment))
}

/// Convert a path below `root` into a logical name.
///
/// Returns `None` when `path` is not inside `root` or a segment is not
/// valid UTF-8.
pub fn path_to_logical(root: &Path, path: &Path) -> Option<String> {
    let relative = path.strip_prefix(root).ok()?;
    let mut segments = Vec::new();
    for component in relative.components() {
        match component {
            Component::Normal(s) => segments.push(s.to_str()?),
            Component::CurDir => {}
            _ => return None,
        }
    }
    if segments.is_empty() {
        None
    } else {
        Some(segments.join("/"))
    }
}

/// Lexically normalize a native path (no filesystem access).
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !out.pop() {
                    out.push("..");
                }
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}
