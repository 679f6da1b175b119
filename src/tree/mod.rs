//! Directory tree rendering
//!
//! `TreeRenderer` walks a root directory depth-first and produces one
//! `TreeLine` per visible entry, prefixed with box-drawing connectors.

mod entry;
mod line;
mod renderer;
mod utils;

// Re-export public types
pub use entry::{DirectoryEntry, entry_order, extension_of};
pub use line::{TreeLine, join_lines};
pub use renderer::TreeRenderer;
pub use utils::{child_prefix, connector, root_name};
