// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// Two steps happen here:
// 1. clap parses the raw arguments into the `Cli` struct
// 2. `Cli::resolve()` validates the input files and turns `Cli` into an
//    immutable `Config`, which is passed explicitly to everything downstream
//
// Rust concepts:
// - Derive macros: clap generates the parsing code from the struct
// - ValueEnum: restricts --type to a fixed set of values
// - Consuming methods (self): resolve() takes ownership of the parsed args
// =============================================================================

use crate::guard::{assert_file_exists, GuardError};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;

pub const CHECKS_FILE_DEFAULT: &str = "checks.json";
pub const HTML_FILE_DEFAULT: &str = "index.html";
pub const URL_DEFAULT: &str = "http://safe-reef-3808.herokuapp.com/";

#[derive(Parser, Debug)]
#[command(
    name = "html-grader",
    version = "0.1.0",
    about = "Grade an HTML page for the presence of CSS selectors",
    long_about = "html-grader loads a list of CSS selectors from a JSON file, checks each one \
                  against a local HTML file or a URL, and prints a JSON object mapping every \
                  selector to true (found) or false (missing)."
)]
pub struct Cli {
    /// Generates additional output messages
    #[arg(short, long)]
    pub verbose: bool,

    /// Path to checks.json (tests to be performed)
    #[arg(short, long, value_name = "CHECK_FILE", default_value = CHECKS_FILE_DEFAULT)]
    pub checks: PathBuf,

    /// Type of check (file or url)
    #[arg(short = 't', long = "type", value_enum, default_value = "file")]
    pub check_type: CheckType,

    /// Path to index.html (file to be checked)
    #[arg(short, long, value_name = "HTML_FILE", default_value = HTML_FILE_DEFAULT)]
    pub file: PathBuf,

    /// Url to be checked
    #[arg(short, long, default_value = URL_DEFAULT)]
    pub url: String,

    /// Give up on the HTTP fetch after this many seconds (default: wait forever)
    #[arg(long, value_name = "SECONDS")]
    pub timeout: Option<u64>,
}

// Where the document comes from
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckType {
    File,
    Url,
}

impl CheckType {
    pub fn as_str(self) -> &'static str {
        match self {
            CheckType::File => "file",
            CheckType::Url => "url",
        }
    }
}

// The document to check, already narrowed down to the selected mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    File(PathBuf),
    Url(String),
}

// Everything the pipeline needs, resolved once per run
#[derive(Debug, Clone)]
pub struct Config {
    pub checks_path: PathBuf,
    pub target: Target,
    pub timeout: Option<Duration>,
}

impl Config {
    pub fn check_type(&self) -> CheckType {
        match self.target {
            Target::File(_) => CheckType::File,
            Target::Url(_) => CheckType::Url,
        }
    }
}

impl Cli {
    // Validates the input files and builds the Config
    //
    // --checks is always validated. --file is only validated in file mode,
    // since a url run never reads it. --url is taken as-is.
    pub fn resolve(self) -> Result<Config, GuardError> {
        let checks_path = assert_file_exists(&self.checks)?;

        let target = match self.check_type {
            CheckType::File => Target::File(assert_file_exists(&self.file)?),
            CheckType::Url => {
                info!("Checking for url {}", self.url);
                Target::Url(self.url)
            }
        };

        Ok(Config {
            checks_path,
            target,
            timeout: self.timeout.map(Duration::from_secs),
        })
    }
}
