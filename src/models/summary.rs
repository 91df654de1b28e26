use serde::{Deserialize, Serialize};

use super::result::PhaseError;
use super::tree::SuiteNode;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Aggregates {
    pub total: usize,
    pub failed: usize,
    pub passed: usize,
    pub todo: usize,
    pub skipped: usize,
    pub regression: usize,
    pub uncaught_exceptions: usize,
}

/// End-of-run report produced by the engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunSummary {
    pub aggregates: Aggregates,
    /// Milliseconds.
    pub duration: f64,
    pub has_error: bool,
    pub runner_errors: Vec<PhaseError>,
    pub failure_tree: Vec<SuiteNode>,
}
