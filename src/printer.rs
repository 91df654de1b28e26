use std::io::Write;
use std::num::NonZeroUsize;

use anyhow::{Context, Result};
use async_trait::async_trait;

use crate::models::PhaseError;
use crate::ui::theme::{self, Painter};

/// Renders a list of errors under a heading.
#[async_trait]
pub trait ErrorsPrinter: Send + Sync {
    /// Print `errors` under `heading`. Nothing is printed for an empty list.
    async fn print_errors(
        &self,
        heading: &str,
        errors: &[PhaseError],
        out: &mut (dyn Write + Send),
    ) -> Result<()>;
}

/// Default printer: a heading rule, then each error with a bounded stack trace.
pub struct ConsoleErrorsPrinter {
    stack_lines_count: NonZeroUsize,
    painter: Painter,
}

impl ConsoleErrorsPrinter {
    pub fn new(stack_lines_count: NonZeroUsize, painter: Painter) -> Self {
        Self {
            stack_lines_count,
            painter,
        }
    }

    fn render(&self, heading: &str, errors: &[PhaseError]) -> Vec<String> {
        let mut lines = vec![self.painter.bold(format!("━━ {} ━━", heading))];

        for entry in errors {
            let error = &entry.error;
            let name = error.name.as_deref().unwrap_or("Error");
            lines.push(String::new());
            lines.push(format!(
                "{} {} {}",
                self.painter.fg(format!("✖ {}:", name), theme::RED),
                error.message,
                self.painter.dim(format!("[{}]", entry.phase)),
            ));

            // The first stack line repeats the message.
            let frames = error
                .stack
                .as_deref()
                .unwrap_or_default()
                .lines()
                .skip(1)
                .map(str::trim)
                .filter(|l| !l.is_empty())
                .take(self.stack_lines_count.get());
            for frame in frames {
                lines.push(self.painter.dim(format!("    {}", frame)));
            }
        }

        lines.push(String::new());
        lines
    }
}

#[async_trait]
impl ErrorsPrinter for ConsoleErrorsPrinter {
    async fn print_errors(
        &self,
        heading: &str,
        errors: &[PhaseError],
        out: &mut (dyn Write + Send),
    ) -> Result<()> {
        if errors.is_empty() {
            return Ok(());
        }

        for line in self.render(heading, errors) {
            writeln!(out, "{}", line)
                .context("failed to write error report")?;
        }
        Ok(())
    }
}
