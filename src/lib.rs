//! stat-tree - a directory tree listing annotated with file metadata
//!
//! Every non-hidden entry is printed with its inode, device, permission
//! string, owner and a scaled size, children sorted by name.

pub mod cli;
pub mod commands;
pub mod error;
pub mod scanner;

// Re-export commonly used types
pub use error::{Result, TreeError};
pub use scanner::{render_tree, traverse, TraversalCounters};
