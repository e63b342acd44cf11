pub mod plot;
pub mod summary;

use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;

use anyhow::{Context, Result};
use concurio_core::{read_log, TimingLog};

/// Read the whole log from a file, or from stdin when no path was given.
pub(crate) fn read_input(path: Option<&Path>) -> Result<TimingLog> {
    let log = match path {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open {}", path.display()))?;
            read_log(BufReader::new(file))?
        }
        None => read_log(io::stdin().lock())?,
    };
    Ok(log)
}
