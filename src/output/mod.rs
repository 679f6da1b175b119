//! Persisting and printing rendered trees
//!
//! - `markdown` - fenced code block written inside the rendered directory
//! - `text` - raw rows written to the working directory, and stdout printing

mod markdown;
mod text;

use std::path::{Path, PathBuf};

use crate::tree::root_name;

// Re-export public functions
pub use markdown::{format_markdown, write_markdown};
pub use text::{print_tree, write_text};

/// `<root>/<rootName>_tree.md`
pub fn markdown_path(root: &Path) -> PathBuf {
    root.join(format!("{}_tree.md", root_name(root)))
}

/// `<dir>/<rootName>_tree.txt`
pub fn text_path(dir: &Path, root: &Path) -> PathBuf {
    dir.join(format!("{}_tree.txt", root_name(root)))
}
