// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Resolve them into a Config (this checks the input files exist)
// 3. Load the HTML (file or url), run the checks, print the JSON report
// 4. Exit with proper code (0 = report printed, 1 = missing input file,
//    2 = any other error)
//
// Exit codes are decided here and nowhere else.
// =============================================================================

mod checker;       // src/checker/ - load, evaluate, report
mod cli;           // src/cli.rs - command-line parsing
mod guard;         // src/guard.rs - input file checks
mod logging;       // src/logging.rs - --verbose diagnostics

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use guard::GuardError;
use tracing::{debug, info, warn};

#[tokio::main]
async fn main() {
    let exit_code = match run().await {
        Ok(()) => 0,
        Err(e) => match e.downcast_ref::<GuardError>() {
            // "<path> does not exist. Exiting."
            Some(guard_error) => {
                eprintln!("{}", guard_error);
                1
            }
            None => {
                eprintln!("Error: {:#}", e);
                2
            }
        },
    };

    std::process::exit(exit_code);
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose)?;

    let config = cli.resolve()?;

    let args: Vec<String> = std::env::args().collect();
    info!("Command line arguments: {}", args.join(","));
    info!("Checking using type: {}", config.check_type().as_str());

    // The only await: everything below runs once the document is in
    let document = checker::load_document(&config).await?;

    let checks = checker::load_checks(&config.checks_path)?;
    let report = checker::evaluate(&document, &checks)?;
    if report.is_empty() {
        warn!("{} contains no checks", config.checks_path.display());
    }
    debug!("{} of {} checks passed", report.passed(), report.len());

    checker::print_report(&report)
}
