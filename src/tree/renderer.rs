//! TreeRenderer - walks a directory and produces the rendered rows

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::config::RenderConfig;
use crate::error::RenderError;

use super::entry::{DirectoryEntry, entry_order};
use super::line::TreeLine;
use super::utils::{LAST_BRANCH, child_prefix, connector, root_name};

/// Pending work on the traversal stack.
enum Frame {
    /// Emit a child's row and, for directories, schedule its contents.
    Entry {
        entry: DirectoryEntry,
        prefix: String,
        is_last: bool,
    },
    /// Read a directory and schedule its visible children.
    Contents { path: PathBuf, prefix: String },
}

/// Renders a directory tree as box-drawing rows.
///
/// Traversal is depth-first and pre-order. Pending frames live on an explicit
/// stack, so tree depth is bounded by heap rather than call stack.
pub struct TreeRenderer {
    config: RenderConfig,
}

impl TreeRenderer {
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Render `root` into rows, the root row first.
    ///
    /// Only a missing or non-directory root is an error. Directories that
    /// cannot be read become a single placeholder row.
    pub fn render(&self, root: &Path) -> Result<Vec<TreeLine>, RenderError> {
        if !root.exists() {
            return Err(RenderError::PathNotFound {
                path: root.to_path_buf(),
            });
        }
        if !root.is_dir() {
            return Err(RenderError::NotADirectory {
                path: root.to_path_buf(),
            });
        }

        let mut lines = vec![TreeLine::root(&root_name(root))];
        let mut stack = vec![Frame::Contents {
            path: root.to_path_buf(),
            prefix: String::new(),
        }];
        let (mut dir_count, mut file_count) = (0usize, 0usize);

        while let Some(frame) = stack.pop() {
            match frame {
                Frame::Entry {
                    entry,
                    prefix,
                    is_last,
                } => {
                    lines.push(TreeLine::new(
                        format!("{}{}", prefix, connector(is_last)),
                        entry.label(),
                    ));
                    if entry.is_dir {
                        dir_count += 1;
                        stack.push(Frame::Contents {
                            path: entry.path,
                            prefix: child_prefix(&prefix, is_last),
                        });
                    } else {
                        file_count += 1;
                    }
                }
                Frame::Contents { path, prefix } => match self.visible_children(&path) {
                    Ok(children) => {
                        let count = children.len();
                        // Reversed so the first child is popped first.
                        for (index, entry) in children.into_iter().enumerate().rev() {
                            stack.push(Frame::Entry {
                                entry,
                                prefix: prefix.clone(),
                                is_last: index + 1 == count,
                            });
                        }
                    }
                    Err(err) => {
                        log::warn!("cannot read directory {}: {}", path.display(), err);
                        lines.push(TreeLine::new(
                            format!("{}{}", prefix, LAST_BRANCH),
                            placeholder(&err),
                        ));
                    }
                },
            }
        }

        log::info!(
            "rendered {}: {} directories, {} files",
            root.display(),
            dir_count,
            file_count
        );
        Ok(lines)
    }

    /// Read, filter and sort the children of one directory.
    fn visible_children(&self, path: &Path) -> io::Result<Vec<DirectoryEntry>> {
        let mut children = Vec::new();
        for item in fs::read_dir(path)? {
            let entry = DirectoryEntry::from_path(item?.path());
            if self.is_visible(&entry) {
                children.push(entry);
            }
        }
        children.sort_by(entry_order);
        Ok(children)
    }

    fn is_visible(&self, entry: &DirectoryEntry) -> bool {
        if entry.is_dir {
            !self.config.is_excluded_folder(&entry.name)
        } else {
            self.config.accepts_extension(&entry.extension)
        }
    }
}

/// Label substituted for a directory that could not be enumerated.
fn placeholder(err: &io::Error) -> String {
    match err.kind() {
        io::ErrorKind::PermissionDenied => "[Permission Denied]".to_string(),
        _ => format!("[Error: {}]", err),
    }
}
