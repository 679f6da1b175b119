//! Treemark - render a directory as an ASCII tree and save it as Markdown and text

pub mod config;
pub mod error;
pub mod output;
pub mod tree;

#[cfg(feature = "test-utils")]
pub mod test_utils;

pub use config::{Defaults, FilterMode, Overrides, RenderConfig, Resolved, resolve};
pub use error::{ConfigError, Error, RenderError, WriteError};
pub use output::{markdown_path, print_tree, text_path, write_markdown, write_text};
pub use tree::{TreeLine, TreeRenderer, join_lines};
