// src/guard.rs
// =============================================================================
// Precondition checks for local input files.
//
// The checks file (and, in file mode, the HTML file) must exist before we
// do any work. Instead of exiting the process from deep inside argument
// parsing, the guard returns a typed error and lets main() decide what to
// do with it (print the message, exit with status 1).
// =============================================================================

use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

// Errors raised while validating inputs
//
// main() looks for this type specifically: it is the only failure that
// maps to exit code 1.
#[derive(Debug, Error)]
pub enum GuardError {
    /// A required local file is missing
    #[error("{} does not exist. Exiting.", .0.display())]
    MissingFile(PathBuf),
}

// Returns the path unchanged if something exists at it
//
// Example:
//   assert_file_exists("checks.json") -> Ok("checks.json")
//   assert_file_exists("nope.json")   -> Err("nope.json does not exist. Exiting.")
pub fn assert_file_exists(path: impl AsRef<Path>) -> Result<PathBuf, GuardError> {
    let path = path.as_ref();
    info!("Checking for file {}", path.display());

    if path.exists() {
        Ok(path.to_path_buf())
    } else {
        Err(GuardError::MissingFile(path.to_path_buf()))
    }
}
