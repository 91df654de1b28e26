//! Console spec reporter: follows a test engine's lifecycle events and prints
//! indented progress, an aggregate summary and the failure tree.

pub mod config;
pub mod models;
pub mod printer;
pub mod reporter;
pub mod source;
pub mod ui;

pub use config::{Config, ReporterConfig};
pub use printer::{ConsoleErrorsPrinter, ErrorsPrinter};
pub use reporter::{ReporterEvent, RunContext, SpecReporter};
pub use source::{NdjsonSource, SummaryProvider, run_reporter};
