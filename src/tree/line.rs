//! Rendered output rows

use std::fmt;

/// One row of the rendered tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeLine {
    /// Ancestor indentation followed by this row's connector. Empty for the root.
    pub prefix: String,
    pub label: String,
}

impl TreeLine {
    pub fn new(prefix: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            label: label.into(),
        }
    }

    /// The first row of every tree: `<name>/` with no prefix.
    pub fn root(name: &str) -> Self {
        Self::new("", format!("{name}/"))
    }
}

impl fmt::Display for TreeLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.prefix, self.label)
    }
}

/// Join rows with single newlines, without a trailing newline.
pub fn join_lines(lines: &[TreeLine]) -> String {
    lines
        .iter()
        .map(|l| l.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}
