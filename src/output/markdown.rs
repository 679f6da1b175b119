//! Markdown output
//!
//! The tree is wrapped in a bare fenced code block so it renders verbatim.

use std::fs;
use std::path::Path;

use crate::error::WriteError;
use crate::tree::{TreeLine, join_lines};

const FENCE: &str = "```";

/// Format rows as a fenced code block with no language tag.
pub fn format_markdown(lines: &[TreeLine]) -> String {
    format!("{FENCE}\n{}\n{FENCE}", join_lines(lines))
}

/// Write the fenced tree to `dest`, replacing any existing file.
pub fn write_markdown(lines: &[TreeLine], dest: &Path) -> Result<(), WriteError> {
    fs::write(dest, format_markdown(lines)).map_err(|e| WriteError::new(dest, e))
}
