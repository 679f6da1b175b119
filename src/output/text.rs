//! Plain text output

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use crate::error::WriteError;
use crate::tree::{TreeLine, join_lines};

/// Write the joined rows to `dest` verbatim.
pub fn write_text(lines: &[TreeLine], dest: &Path) -> Result<(), WriteError> {
    fs::write(dest, join_lines(lines)).map_err(|e| WriteError::new(dest, e))
}

/// Print the rows to stdout, one per line.
pub fn print_tree(lines: &[TreeLine]) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for line in lines {
        writeln!(out, "{}", line)?;
    }
    out.flush()
}
