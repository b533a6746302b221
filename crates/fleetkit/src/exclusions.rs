//! Exclusions file loading.
//!
//! An exclusions file lists application names to ignore in every inventory
//! for the run, one name per line, UTF-8, no escaping. Names are
//! case-sensitive as written.

use crate::error::{Error, Result};
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

/// File name probed in the working directory when no path is given.
pub const DEFAULT_EXCLUSIONS_FILE: &str = "exclusions.txt";

/// Load the exclusion set.
///
/// An explicitly named file must exist; the default file is optional and its
/// absence yields an empty set. Lines are trimmed, blank lines skipped, and
/// duplicates collapse.
pub fn load(path: Option<&Path>) -> Result<BTreeSet<String>> {
    let path = match path {
        Some(path) => {
            if !path.is_file() {
                return Err(Error::config(format!(
                    "exclusions file does not exist: {}",
                    path.display()
                )));
            }
            path
        }
        None => {
            let default = Path::new(DEFAULT_EXCLUSIONS_FILE);
            if !default.is_file() {
                log::debug!("no default exclusions file, continuing without exclusions");
                return Ok(BTreeSet::new());
            }
            log::debug!("loading default exclusions");
            default
        }
    };

    let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    let exclusions: BTreeSet<String> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(ToString::to_string)
        .collect();

    if exclusions.is_empty() {
        log::debug!("no exclusions found in {}", path.display());
    } else {
        log::debug!("loaded {} exclusions from {}", exclusions.len(), path.display());
    }

    Ok(exclusions)
}
