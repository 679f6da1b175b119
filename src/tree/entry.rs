//! Directory entries as seen by the renderer

use std::cmp::Ordering;
use std::fs;
use std::path::{Path, PathBuf};

/// A single child of a directory, read fresh on every traversal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    pub name: String,
    pub path: PathBuf,
    pub is_dir: bool,
    /// Lowercased extension with its leading dot; empty for directories.
    pub extension: String,
}

impl DirectoryEntry {
    /// Build an entry from a path, following symlinks to decide `is_dir`.
    ///
    /// Paths whose metadata cannot be read (broken links, races) count as files.
    pub fn from_path(path: PathBuf) -> Self {
        let name = path
            .file_name()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default();
        let is_dir = fs::metadata(&path).is_ok_and(|m| m.is_dir());
        let extension = if is_dir {
            String::new()
        } else {
            extension_of(&name)
        };
        Self {
            name,
            path,
            is_dir,
            extension,
        }
    }

    /// Display label: the name, with a trailing `/` for directories.
    pub fn label(&self) -> String {
        if self.is_dir {
            format!("{}/", self.name)
        } else {
            self.name.clone()
        }
    }
}

/// Directories first, then case-insensitive by name.
///
/// The raw name breaks ties so that `a` and `A` always land in the same order.
pub fn entry_order(a: &DirectoryEntry, b: &DirectoryEntry) -> Ordering {
    (!a.is_dir, a.name.to_lowercase(), &a.name).cmp(&(!b.is_dir, b.name.to_lowercase(), &b.name))
}

/// Lowercased extension of a file name including the dot, or an empty string.
///
/// `.bashrc` and `archive.` have no extension; `photo.JPG` has `.jpg`.
pub fn extension_of(name: &str) -> String {
    Path::new(name)
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .filter(|e| !e.is_empty())
        .map(|e| format!(".{e}"))
        .unwrap_or_default()
}
