// src/checker/evaluate.rs
// =============================================================================
// This module runs the checks.
//
// A "check" is just a CSS selector. It passes if the document contains at
// least one element matching it.
//
// The checks file is a JSON array of selectors:
//   ["h1", "a[href]", "#profilelink"]
//
// The checks are sorted before they run, and the report keeps them in that
// order. Running the same selector twice leaves one entry in the report.
// =============================================================================

use anyhow::{Context, Result};
use scraper::{Html, Selector};
use serde::Serialize;
use serde_json::{Map, Value};
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Error)]
pub enum CheckError {
    /// The selector could not be parsed as CSS
    #[error("invalid selector '{selector}': {reason}")]
    InvalidSelector { selector: String, reason: String },
}

// selector -> found?, in the order the checks ran
//
// serde_json is built with `preserve_order`, so the Map remembers insertion
// order and serializes the keys that way.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct CheckReport(Map<String, Value>);

impl CheckReport {
    // Re-recording a selector overwrites the value in place
    fn record(&mut self, selector: &str, found: bool) {
        self.0.insert(selector.to_string(), Value::Bool(found));
    }

    #[cfg(test)]
    pub fn get(&self, selector: &str) -> Option<bool> {
        self.0.get(selector).and_then(Value::as_bool)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn passed(&self) -> usize {
        self.0.values().filter(|v| v.as_bool() == Some(true)).count()
    }

    #[cfg(test)]
    pub fn selectors(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

// Reads the checks file and returns its selectors, sorted
//
// Parameters:
//   path: the checks file (already known to exist, see guard.rs)
//
// Returns: Vec<String> of selectors in lexicographic order
//
// The sort decides the key order of the JSON report, so two runs over the
// same checks always print the same thing.
//
// Example:
//   checks.json = ["h1", "#profilelink", "a[href]"]
//   result      = ["#profilelink", "a[href]", "h1"]
//
// Anything that isn't a JSON array of strings is an error naming the file.
pub fn load_checks(path: &Path) -> Result<Vec<String>> {
    info!("Checking using file {}", path.display());

    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    let mut checks: Vec<String> = serde_json::from_str(&raw)
        .with_context(|| format!("{} is not a JSON array of selectors", path.display()))?;

    checks.sort();
    Ok(checks)
}

// Checks every selector against the document
//
// Every selector is tested (no short-circuit). The first selector that
// isn't valid CSS aborts the whole run.
pub fn evaluate(document: &Html, checks: &[String]) -> Result<CheckReport, CheckError> {
    let mut report = CheckReport::default();

    for check in checks {
        let selector = Selector::parse(check).map_err(|e| CheckError::InvalidSelector {
            selector: check.clone(),
            reason: e.to_string(),
        })?;

        let found = document.select(&selector).next().is_some();
        debug!("{} -> {}", check, found);
        report.record(check, found);
    }

    Ok(report)
}
