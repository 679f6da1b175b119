//! Shared helpers for prefixes, connectors and root naming

use std::path::Path;

pub const BRANCH: &str = "├── ";
pub const LAST_BRANCH: &str = "└── ";
const PIPE_INDENT: &str = "│   ";
const SPACE_INDENT: &str = "    ";

/// Connector glyph for a child at this position.
pub fn connector(is_last: bool) -> &'static str {
    if is_last { LAST_BRANCH } else { BRANCH }
}

/// Calculate the prefix handed down to a child's own subtree.
pub fn child_prefix(current_prefix: &str, is_last: bool) -> String {
    if is_last {
        format!("{}{}", current_prefix, SPACE_INDENT)
    } else {
        format!("{}{}", current_prefix, PIPE_INDENT)
    }
}

/// Name shown on the root line and used for artifact file names.
///
/// Paths like `.` or `..` carry no final component, so the canonical path is
/// consulted. A filesystem root has no name at all and yields an empty string,
/// which keeps the result free of separators.
pub fn root_name(path: &Path) -> String {
    if let Some(name) = path.file_name() {
        return name.to_string_lossy().to_string();
    }
    path.canonicalize()
        .ok()
        .and_then(|p| p.file_name().map(|n| n.to_string_lossy().to_string()))
        .unwrap_or_default()
}
