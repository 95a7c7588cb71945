//! Textual path resolution.
//!
//! Relative paths are made absolute against the working directory before
//! serialization. Resolution is a pure string transform: no filesystem
//! access, no symlink resolution. Output always uses forward slashes so the
//! emitted command line is deterministic across platforms.

use std::path::Path;

/// Render a path with forward slashes, collapsing `.` and `..` segments.
fn normalize(path: &str) -> String {
    let unified = path.replace('\\', "/");
    let absolute = unified.starts_with('/');

    let mut segments: Vec<&str> = Vec::new();
    for segment in unified.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                if matches!(segments.last(), Some(&s) if s != "..") {
                    segments.pop();
                } else if !absolute {
                    segments.push("..");
                }
            }
            other => segments.push(other),
        }
    }

    let joined = segments.join("/");
    if absolute {
        format!("/{joined}")
    } else if joined.is_empty() {
        ".".to_string()
    } else {
        joined
    }
}

fn is_absolute_text(path: &str) -> bool {
    // Unix-style roots and Windows drive letters both count as absolute.
    path.starts_with('/')
        || path.starts_with('\\')
        || (path.len() >= 2 && path.as_bytes()[1] == b':' && path.as_bytes()[0].is_ascii_alphabetic())
}

/// Resolve `path` to its absolute forward-slash form against `working_dir`.
///
/// The working directory is expected to be absolute; a relative working
/// directory is used verbatim as the base.
pub fn make_absolute(working_dir: &Path, path: &Path) -> String {
    let text = path.to_string_lossy();
    if is_absolute_text(&text) {
        return normalize(&text);
    }

    let base = working_dir.to_string_lossy();
    normalize(&format!("{base}/{text}"))
}
