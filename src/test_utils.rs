//! Test utilities for building temporary directory trees.
//!
//! This module is only compiled for tests and benchmarks.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary project directory for testing.
///
/// The project lives one level below the temp dir so that it has a stable
/// name on the root line. Everything is removed when dropped.
pub struct TestTree {
    _dir: TempDir,
    root: PathBuf,
}

impl TestTree {
    /// Create an empty project directory called `name`.
    pub fn new(name: &str) -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let root = dir.path().join(name);
        fs::create_dir(&root).expect("Failed to create project dir");
        Self { _dir: dir, root }
    }

    /// Get the path to the project directory.
    pub fn path(&self) -> &Path {
        &self.root
    }

    /// Populate a wide and moderately deep tree.
    ///
    /// Creates `width` directories per level down to `depth`, each holding
    /// `files` files with a mix of extensions.
    pub fn populate(&self, width: usize, depth: usize, files: usize) {
        const EXTENSIONS: &[&str] = &["rs", "py", "txt", "png", "md"];

        fn fill(dir: &Path, width: usize, depth: usize, files: usize) {
            for f in 0..files {
                let ext = EXTENSIONS[f % EXTENSIONS.len()];
                fs::write(dir.join(format!("file_{f}.{ext}")), "").expect("Failed to write file");
            }
            if depth == 0 {
                return;
            }
            for w in 0..width {
                let sub = dir.join(format!("dir_{w}"));
                fs::create_dir(&sub).expect("Failed to create dir");
                fill(&sub, width, depth - 1, files);
            }
        }

        fill(&self.root, width, depth, files);
    }
}
