use std::io::Write;

use anyhow::{Context, Result};
use tracing::{debug, trace};

use crate::{
    config::ReporterConfig,
    models::{GroupHeader, PhaseError, RunSummary, TestOutcome, TestStart},
    printer::{ConsoleErrorsPrinter, ErrorsPrinter},
    source::SummaryProvider,
    ui::{self, RenderOptions, failure_tree, heading, test_line},
};

pub mod context;
pub mod events;

pub use context::RunContext;
pub use events::ReporterEvent;

/// Tracks nested suite/group/test context across the engine's event stream
/// and writes progress lines plus the end-of-run report to `out`.
pub struct SpecReporter<W, P = ConsoleErrorsPrinter> {
    out: W,
    printer: P,
    options: RenderOptions,
    context: RunContext,
}

impl<W: Write + Send> SpecReporter<W> {
    pub fn new(out: W, config: &ReporterConfig, options: RenderOptions) -> Self {
        let printer = ConsoleErrorsPrinter::new(config.stack_lines_count, options.painter());
        Self::with_printer(out, printer, options)
    }
}

impl<W: Write + Send, P: ErrorsPrinter> SpecReporter<W, P> {
    pub fn with_printer(out: W, printer: P, options: RenderOptions) -> Self {
        Self {
            out,
            printer,
            options,
            context: RunContext::default(),
        }
    }

    pub fn context(&self) -> &RunContext {
        &self.context
    }

    pub fn into_output(self) -> W {
        self.out
    }

    /// Process one engine event. `runner:end` asks `engine` for the summary and
    /// prints the full report before returning.
    pub async fn handle(
        &mut self,
        event: ReporterEvent,
        engine: &dyn SummaryProvider,
    ) -> Result<()> {
        trace!(event = event.name(), "reporter event");

        match event {
            ReporterEvent::SuiteStart { name } => {
                debug!(suite = %name, "suite started");
                self.context.suite_name = Some(name);
                self.context.printed_file_name = None;
            }
            ReporterEvent::SuiteEnd => {
                self.context.suite_name = None;
            }
            ReporterEvent::GroupStart(header) => {
                debug!(group = %header.title, "group pending");
                self.context.pending_group = Some(header);
            }
            ReporterEvent::GroupEnd => {
                if let Some(group) = self.context.pending_group.take() {
                    debug!(group = %group.title, "group ended without tests, header suppressed");
                }
                self.context.group_title = None;
            }
            ReporterEvent::TestStart(payload) => self.test_started(payload)?,
            ReporterEvent::TestEnd(outcome) => self.test_finished(&outcome)?,
            ReporterEvent::UncaughtException(error) => {
                debug!(message = %error.message, "uncaught exception collected");
                let error = PhaseError::test(error);
                self.context.uncaught_exceptions.push(error);
            }
            ReporterEvent::RunnerEnd => {
                let summary = engine.summary();
                self.print_summary(&summary).await?;
                self.context = RunContext::default();
            }
        }

        Ok(())
    }

    fn test_started(&mut self, payload: TestStart) -> Result<()> {
        self.context.file_name = payload.file_name;

        if let Some(group) = self.context.pending_group.take() {
            self.flush_group(group)?;
        } else if self.context.needs_file_banner() {
            let painter = self.options.painter();
            if let Some(file) = self.context.file_name.clone() {
                self.write_lines(heading::file_banner(&file, &painter))?;
                self.context.printed_file_name = Some(file);
            }
        }

        self.context.test_title = Some(payload.title.resolved().to_string());
        Ok(())
    }

    fn flush_group(&mut self, group: GroupHeader) -> Result<()> {
        let fallback = self.context.file_name.as_deref();
        let file = group.file_name.as_deref().or(fallback);
        let lines = heading::group(
            self.context.suite_name.as_deref(),
            &group.title,
            file,
            &self.options.painter(),
        );
        self.write_lines(lines)?;

        debug!(group = %group.title, "group header printed");
        self.context.group_title = Some(group.title);
        self.context.printed_file_name = None;
        Ok(())
    }

    fn test_finished(&mut self, outcome: &TestOutcome) -> Result<()> {
        let indented = self.context.indented();
        let lines = test_line::render(outcome, indented, &self.options.painter());
        self.write_lines(lines)?;
        self.context.test_title = None;
        Ok(())
    }

    /// Aggregate block, runner errors, failure tree and uncaught exceptions.
    async fn print_summary(&mut self, summary: &RunSummary) -> Result<()> {
        let lines = ui::summary::render(summary, &self.options);
        self.write_lines(lines)?;

        for section in failure_tree::sections(summary, &self.context.uncaught_exceptions) {
            self.printer
                .print_errors(section.heading, section.errors, &mut self.out)
                .await?;
        }

        self.out.flush().context("failed to flush output")?;
        Ok(())
    }

    fn write_lines(&mut self, lines: Vec<String>) -> Result<()> {
        for line in lines {
            writeln!(self.out, "{}", line)
                .context("failed to write reporter output")?;
        }
        Ok(())
    }
}
