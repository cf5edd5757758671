use std::ffi::OsString;
use std::fmt;
use std::fs::Metadata;
use std::os::unix::fs::MetadataExt;
use std::path::PathBuf;

use nix::sys::stat::{mode_t, Mode};

/// Permission bits tested in display order after the type marker
const PERMISSION_BITS: [(Mode, u8); 9] = [
    (Mode::S_IRUSR, b'r'),
    (Mode::S_IWUSR, b'w'),
    (Mode::S_IXUSR, b'x'),
    (Mode::S_IRGRP, b'r'),
    (Mode::S_IWGRP, b'w'),
    (Mode::S_IXGRP, b'x'),
    (Mode::S_IROTH, b'r'),
    (Mode::S_IWOTH, b'w'),
    (Mode::S_IXOTH, b'x'),
];

/// `ls`-style mode string: type marker followed by rwx for user, group, other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PermissionString([u8; 10]);

impl PermissionString {
    pub fn from_mode(mode: u32, is_dir: bool) -> Self {
        let mode = Mode::from_bits_truncate(mode as mode_t);
        let mut chars = [b'-'; 10];
        if is_dir {
            chars[0] = b'd';
        }
        for (slot, (flag, c)) in chars[1..].iter_mut().zip(PERMISSION_BITS) {
            if mode.contains(flag) {
                *slot = c;
            }
        }
        Self(chars)
    }

    pub fn from_metadata(metadata: &Metadata) -> Self {
        Self::from_mode(metadata.mode(), metadata.is_dir())
    }

    pub fn as_str(&self) -> &str {
        // Only ASCII bytes are ever stored
        std::str::from_utf8(&self.0).unwrap_or("----------")
    }
}

impl fmt::Display for PermissionString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One non-hidden entry of a directory listing, with its resolved metadata.
#[derive(Debug, Clone)]
pub struct DirEntryInfo {
    /// Full path used to descend into the entry
    pub path: PathBuf,

    /// Raw base name, never empty and never starting with '.'
    pub name: OsString,

    /// Serial number from the directory entry itself
    pub inode: u64,

    /// Device the (followed) entry resides on
    pub device: u64,

    pub permissions: PermissionString,

    /// Login name of the owning user
    pub owner_name: String,

    /// Byte size at scan time
    pub size_bytes: u64,

    /// True if the entry itself is a directory (symlinks are not followed)
    pub is_directory: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_permissions_regular_file() {
        assert_eq!(PermissionString::from_mode(0o644, false).as_str(), "-rw-r--r--");
        assert_eq!(PermissionString::from_mode(0o755, false).as_str(), "-rwxr-xr-x");
    }

    #[test]
    fn test_permissions_directory() {
        assert_eq!(PermissionString::from_mode(0o040755, true).as_str(), "drwxr-xr-x");
        assert_eq!(PermissionString::from_mode(0o700, true).to_string(), "drwx------");
    }

    #[test]
    fn test_permissions_each_bit_independent() {
        let expected = [
            (0o400, "-r--------"),
            (0o200, "--w-------"),
            (0o100, "---x------"),
            (0o040, "----r-----"),
            (0o020, "-----w----"),
            (0o010, "------x---"),
            (0o004, "-------r--"),
            (0o002, "--------w-"),
            (0o001, "---------x"),
        ];
        for (mode, s) in expected {
            assert_eq!(PermissionString::from_mode(mode, false).as_str(), s, "mode {:o}", mode);
        }
    }

    #[test]
    fn test_permissions_ignore_special_bits() {
        // setuid, setgid and sticky are not shown
        assert_eq!(PermissionString::from_mode(0o7777, false).as_str(), "-rwxrwxrwx");
        assert_eq!(PermissionString::from_mode(0o1000, true).as_str(), "d---------");
    }

    #[test]
    fn test_permissions_from_metadata() {
        use std::fs::{self, File, Permissions};
        use std::os::unix::fs::PermissionsExt;
        use tempfile::TempDir;

        let dir = TempDir::new().unwrap();
        let file = dir.path().join("script.sh");
        File::create(&file).unwrap();
        fs::set_permissions(&file, Permissions::from_mode(0o750)).unwrap();

        let meta = fs::metadata(&file).unwrap();
        assert_eq!(PermissionString::from_metadata(&meta).as_str(), "-rwxr-x---");

        let meta = fs::metadata(dir.path()).unwrap();
        assert!(PermissionString::from_metadata(&meta).as_str().starts_with('d'));
    }
}
