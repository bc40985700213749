//! Command implementations.

use std::fs::File;
use std::io::{self, BufRead, BufReader};

use anyhow::Context;
use camino::Utf8Path;

pub mod report;

/// Open the input to analyze: `path` when given, standard input otherwise.
///
/// For files, the size is checked against `max_bytes` before any reading.
/// Standard input is checked while it is read.
pub fn open_input(
    path: Option<&Utf8Path>,
    max_bytes: Option<usize>,
) -> anyhow::Result<Box<dyn BufRead>> {
    let Some(path) = path else {
        return Ok(Box::new(io::stdin().lock()));
    };

    // Preflight: check file size via metadata before reading into memory.
    let metadata =
        std::fs::metadata(path.as_std_path()).with_context(|| format!("failed to read {path}"))?;
    if let Some(max) = max_bytes {
        let size = metadata.len();
        if size > max as u64 {
            anyhow::bail!("input too large: {path} is {size} bytes (limit: {max} bytes)");
        }
    }

    let file = File::open(path.as_std_path()).with_context(|| format!("failed to read {path}"))?;
    Ok(Box::new(BufReader::new(file)))
}
