// src/checker/mod.rs
// =============================================================================
// This module contains the grading pipeline.
//
// Submodules:
// - source: Reads or fetches the HTML and parses it
// - evaluate: Loads the selectors and checks each one against the document
// - report: Prints the results as JSON
// =============================================================================

mod evaluate;
mod report;
mod source;

pub use evaluate::{evaluate, load_checks};
pub use report::print_report;
pub use source::load_document;
