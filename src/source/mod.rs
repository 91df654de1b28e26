pub mod ndjson;

use std::io::Write;

use anyhow::Result;

use crate::models::RunSummary;
use crate::printer::ErrorsPrinter;
use crate::reporter::{ReporterEvent, SpecReporter};

pub use ndjson::NdjsonSource;

/// Engine side of the contract: the aggregate summary, valid once
/// `runner:end` has fired.
pub trait SummaryProvider {
    fn summary(&self) -> RunSummary;
}

impl SummaryProvider for RunSummary {
    fn summary(&self) -> RunSummary {
        self.clone()
    }
}

/// Drive `reporter` with every event from `source` until the stream ends.
/// Returns the number of events processed.
pub async fn run_reporter<R, W, P>(
    source: &mut NdjsonSource<R>,
    reporter: &mut SpecReporter<W, P>,
) -> Result<usize>
where
    R: tokio::io::AsyncBufRead + Unpin,
    W: Write + Send,
    P: ErrorsPrinter,
{
    let mut count = 0;
    while let Some(event) = source.next_event().await? {
        let is_end = matches!(event, ReporterEvent::RunnerEnd);
        reporter.handle(event, &*source).await?;
        count += 1;
        if is_end {
            tracing::debug!(events = count, "run reported");
        }
    }
    Ok(count)
}
