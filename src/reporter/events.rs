use crate::models::{ErrorInfo, GroupHeader, TestOutcome, TestStart};

/// Lifecycle events emitted by the test engine, in the order
/// `suite:start → (group:start → test:start* → group:end)* → test:start* → suite:end`,
/// repeated per suite and closed by `runner:end`. `uncaught:exception` may
/// arrive at any point.
#[derive(Debug, Clone, PartialEq)]
pub enum ReporterEvent {
    SuiteStart { name: String },
    SuiteEnd,
    GroupStart(GroupHeader),
    GroupEnd,
    TestStart(TestStart),
    TestEnd(TestOutcome),
    UncaughtException(ErrorInfo),
    RunnerEnd,
}

impl ReporterEvent {
    /// Engine name of the event, as used on the wire.
    pub fn name(&self) -> &'static str {
        match self {
            ReporterEvent::SuiteStart { .. } => "suite:start",
            ReporterEvent::SuiteEnd => "suite:end",
            ReporterEvent::GroupStart(_) => "group:start",
            ReporterEvent::GroupEnd => "group:end",
            ReporterEvent::TestStart(_) => "test:start",
            ReporterEvent::TestEnd(_) => "test:end",
            ReporterEvent::UncaughtException(_) => "uncaught:exception",
            ReporterEvent::RunnerEnd => "runner:end",
        }
    }
}
