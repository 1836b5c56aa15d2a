// src/checker/report.rs
// =============================================================================
// Prints the check results as JSON.
//
// Output looks like:
// {
//     "#nope": false,
//     "h1": true
// }
//
// Four-space indent, keys in the order the checks ran.
// =============================================================================

use super::evaluate::CheckReport;
use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::io::{self, Write};

pub fn render(report: &CheckReport) -> Result<String> {
    let mut out = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(b"    "));
    report.serialize(&mut serializer)?;

    Ok(String::from_utf8(out)?)
}

// Writes the report to stdout, followed by a newline
//
// A closed stdout (e.g. `html-grader | head -c0`) comes back as an error
// instead of the panic println! would give us.
pub fn print_report(report: &CheckReport) -> Result<()> {
    write_report(&mut io::stdout().lock(), report)
}

fn write_report(out: &mut impl Write, report: &CheckReport) -> Result<()> {
    writeln!(out, "{}", render(report)?).context("failed to write report")?;
    out.flush().context("failed to write report")?;
    Ok(())
}
