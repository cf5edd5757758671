//! Tree command implementation

use std::io::{self, BufWriter, Write};

use crate::cli::Cli;
use crate::error::Result;
use crate::scanner::{render_tree, SystemUsers, TraversalCounters};

/// Run the tree listing for the parsed command line, writing to stdout
pub fn run(args: &Cli) -> Result<TraversalCounters> {
    tracing::info!(path = %args.path.display(), "Listing directory tree");

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    let result = render_tree(&args.path, &SystemUsers, &mut out);
    // Whatever was listed before a failure still reaches the terminal
    out.flush()?;
    let counters = result?;

    tracing::debug!(dirs = counters.dirs, files = counters.files, "Listing complete");
    Ok(counters)
}
