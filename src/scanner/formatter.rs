use std::io::Write;
use std::os::unix::ffi::OsStrExt;

use super::entry::DirEntryInfo;
use super::size::scale;
use super::walker::TraversalCounters;
use crate::error::Result;

pub const BRANCH: &str = "├── ";
pub const BRANCH_CONTINUATION: &str = "│   ";
pub const TERMINAL: &str = "└── ";
pub const TERMINAL_CONTINUATION: &str = "    ";

/// Connector for an entry and the continuation its children inherit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyphs {
    pub connector: &'static str,
    pub continuation: &'static str,
}

impl Glyphs {
    pub fn for_position(is_last: bool) -> Self {
        if is_last {
            Self {
                connector: TERMINAL,
                continuation: TERMINAL_CONTINUATION,
            }
        } else {
            Self {
                connector: BRANCH,
                continuation: BRANCH_CONTINUATION,
            }
        }
    }
}

/// Write one entry line, e.g. `│   ├── [ 1234 2049 -rw-r--r-- alice 4K ]  notes.txt`
///
/// The name is written as its raw bytes.
pub fn write_entry<W: Write + ?Sized>(
    out: &mut W,
    prefix: &str,
    connector: &str,
    entry: &DirEntryInfo,
) -> Result<()> {
    let (unit, value) = scale(entry.size_bytes);
    write!(
        out,
        "{}{}[ {} {} {} {} {}{} ]  ",
        prefix,
        connector,
        entry.inode,
        entry.device,
        entry.permissions,
        entry.owner_name,
        value,
        unit
    )?;
    out.write_all(entry.name.as_bytes())?;
    out.write_all(b"\n")?;
    Ok(())
}

/// Write the trailing blank line and totals.
///
/// The root directory is counted by the traversal like any other, so it is
/// subtracted here once.
pub fn write_summary<W: Write + ?Sized>(out: &mut W, counters: &TraversalCounters) -> Result<()> {
    writeln!(out)?;
    writeln!(
        out,
        "{} directories, {} files",
        counters.dirs.saturating_sub(1),
        counters.files
    )?;
    Ok(())
}
