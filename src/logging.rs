// src/logging.rs
// =============================================================================
// Diagnostics for --verbose.
//
// Verbose lines go to stdout, right before the JSON report, so a plain run
// prints nothing but the report. Without --verbose no subscriber is
// installed and every tracing macro is a no-op.
// =============================================================================

use anyhow::{anyhow, Result};
use std::io;
use tracing_subscriber::{fmt, EnvFilter};

pub fn init(verbose: bool) -> Result<()> {
    if !verbose {
        return Ok(());
    }

    // Only our own events; reqwest and hyper are chatty at debug
    let filter = EnvFilter::new(format!("{}=debug", env!("CARGO_CRATE_NAME")));

    fmt()
        .with_env_filter(filter)
        .with_writer(io::stdout)
        .with_target(false)
        .with_level(false)
        .with_ansi(false)
        .without_time()
        .try_init()
        .map_err(|e| anyhow!("failed to install logger: {}", e))
}
