use clap::Parser;
use std::path::PathBuf;

/// stat-tree - list a directory tree with inode, device, mode, owner and size
///
/// The listing on stdout depends only on PATH. `-v`/`-q` and `RUST_LOG`
/// only control diagnostics written to stderr.
#[derive(Parser, Debug)]
#[command(name = "stat-tree")]
#[command(author, version, about)]
pub struct Cli {
    /// Directory to list
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Increase stderr diagnostics (-v, -vv, -vvv); never changes stdout
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only report warnings and errors on stderr; never changes stdout
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}
