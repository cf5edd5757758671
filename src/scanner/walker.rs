use std::fs;
use std::io::{self, Write};
use std::os::unix::ffi::OsStrExt;
use std::os::unix::fs::{DirEntryExt, MetadataExt};
use std::path::Path;

use crate::error::{Result, TreeError};

use super::entry::{DirEntryInfo, PermissionString};
use super::formatter::{write_entry, write_summary, Glyphs};
use super::owner::UserLookup;

/// Running totals for one tree render.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TraversalCounters {
    /// Directories opened, root included
    pub dirs: u64,
    /// Non-directory entries printed
    pub files: u64,
}

/// Print the header line, the whole tree under `root` and the summary.
///
/// Returns the raw counters (root still included in `dirs`).
pub fn render_tree<U, W>(root: &Path, users: &U, out: &mut W) -> Result<TraversalCounters>
where
    U: UserLookup + ?Sized,
    W: Write + ?Sized,
{
    out.write_all(root.as_os_str().as_bytes())?;
    out.write_all(b"\n")?;

    let mut counters = TraversalCounters::default();
    traverse(root, &mut counters, "", users, out)?;

    write_summary(out, &counters)?;
    Ok(counters)
}

/// Render the children of `path` under `prefix`, recursing into subdirectories.
pub fn traverse<U, W>(
    path: &Path,
    counters: &mut TraversalCounters,
    prefix: &str,
    users: &U,
    out: &mut W,
) -> Result<()>
where
    U: UserLookup + ?Sized,
    W: Write + ?Sized,
{
    let entries = read_sorted_entries(path, users)?;
    counters.dirs += 1;

    tracing::debug!(path = %path.display(), entries = entries.len(), "Entered directory");

    let total = entries.len();
    for (idx, entry) in entries.into_iter().enumerate() {
        let glyphs = Glyphs::for_position(idx + 1 == total);

        write_entry(out, prefix, glyphs.connector, &entry)?;

        if entry.is_directory {
            let child_prefix = format!("{}{}", prefix, glyphs.continuation);
            match traverse(&entry.path, counters, &child_prefix, users, out) {
                Ok(()) => {}
                Err(TreeError::DirectoryOpen { path: skipped, source }) => {
                    tracing::warn!(path = %skipped.display(), error = %source, "Skipping unreadable directory");
                }
                Err(e) => return Err(e),
            }
        } else {
            counters.files += 1;
        }
    }

    Ok(())
}

/// List the non-hidden entries of `path` with their metadata, sorted by name.
pub fn read_sorted_entries<U>(path: &Path, users: &U) -> Result<Vec<DirEntryInfo>>
where
    U: UserLookup + ?Sized,
{
    let read_dir = fs::read_dir(path).map_err(|e| TreeError::DirectoryOpen {
        path: path.to_path_buf(),
        source: e,
    })?;

    collect_sorted(path, read_dir, users)
}

/// Resolve and sort the entries yielded while reading `path`.
///
/// Any failure to read the next entry aborts the listing.
fn collect_sorted<I, U>(path: &Path, dirents: I, users: &U) -> Result<Vec<DirEntryInfo>>
where
    I: IntoIterator<Item = io::Result<fs::DirEntry>>,
    U: UserLookup + ?Sized,
{
    let mut entries = Vec::new();
    for dirent in dirents {
        let dirent = dirent.map_err(|e| TreeError::DirectoryRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        if dirent.file_name().as_bytes().first() == Some(&b'.') {
            continue;
        }

        entries.push(resolve_entry(&dirent, users)?);
    }

    entries.sort_by(|a, b| a.name.as_bytes().cmp(b.name.as_bytes()));
    Ok(entries)
}

fn resolve_entry<U>(dirent: &fs::DirEntry, users: &U) -> Result<DirEntryInfo>
where
    U: UserLookup + ?Sized,
{
    let path = dirent.path();

    // Follows symlinks, like stat(2)
    let metadata = fs::metadata(&path).map_err(|e| TreeError::Metadata {
        path: path.clone(),
        source: e,
    })?;

    // The entry's own type decides recursion, so a symlink to a directory is a leaf
    let is_directory = dirent
        .file_type()
        .map_err(|e| TreeError::Metadata {
            path: path.clone(),
            source: e,
        })?
        .is_dir();

    let owner_name = users
        .user_name(metadata.uid())
        .map_err(|reason| TreeError::OwnerLookup {
            uid: metadata.uid(),
            path: path.clone(),
            reason,
        })?;

    tracing::trace!(path = %path.display(), owner = %owner_name, size = metadata.len(), "Resolved entry");

    Ok(DirEntryInfo {
        name: dirent.file_name(),
        inode: dirent.ino(),
        device: metadata.dev(),
        permissions: PermissionString::from_metadata(&metadata),
        owner_name,
        size_bytes: metadata.len(),
        is_directory,
        path,
    })
}
