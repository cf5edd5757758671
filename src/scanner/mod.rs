mod entry;
mod formatter;
mod owner;
mod size;
mod walker;

pub use entry::{DirEntryInfo, PermissionString};
pub use formatter::{write_entry, write_summary, Glyphs};
pub use owner::{SystemUsers, UserLookup};
pub use size::{scale, ScaleUnit};
pub use walker::{read_sorted_entries, render_tree, traverse, TraversalCounters};
