use anyhow::{Context, Result};
use serde::Deserialize;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, Lines};
use tracing::{debug, warn};

use super::SummaryProvider;
use crate::models::{ErrorInfo, GroupHeader, RunSummary, TestOutcome, TestStart};
use crate::reporter::ReporterEvent;

/// Reads engine events as newline-delimited JSON, one object per line tagged
/// by its `"event"` name. The summary carried by `runner:end` is kept and
/// served through [`SummaryProvider`].
pub struct NdjsonSource<R> {
    lines: Lines<R>,
    summary: Option<RunSummary>,
    skipped: usize,
}

impl<R: AsyncBufRead + Unpin> NdjsonSource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            summary: None,
            skipped: 0,
        }
    }

    /// Next well-formed event, or `None` at end of stream. Blank lines are
    /// ignored and malformed lines are logged and skipped.
    pub async fn next_event(&mut self) -> Result<Option<ReporterEvent>> {
        while let Some(line) = self
            .lines
            .next_line()
            .await
            .context("failed to read engine events")?
        {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            match serde_json::from_str::<EngineEvent>(line) {
                Ok(event) => return Ok(Some(self.accept(event))),
                Err(e) => {
                    warn!(error = %e, line, "skipping malformed engine event");
                    self.skipped += 1;
                }
            }
        }
        Ok(None)
    }

    /// Number of lines that could not be parsed so far.
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    fn accept(&mut self, event: EngineEvent) -> ReporterEvent {
        match event {
            EngineEvent::SuiteStart { name } => ReporterEvent::SuiteStart { name },
            EngineEvent::SuiteEnd => ReporterEvent::SuiteEnd,
            EngineEvent::GroupStart(header) => ReporterEvent::GroupStart(header),
            EngineEvent::GroupEnd => ReporterEvent::GroupEnd,
            EngineEvent::TestStart(payload) => ReporterEvent::TestStart(payload),
            EngineEvent::TestEnd(outcome) => ReporterEvent::TestEnd(outcome),
            EngineEvent::UncaughtException { error } => ReporterEvent::UncaughtException(error),
            EngineEvent::RunnerEnd { summary } => {
                if summary.is_none() {
                    debug!("runner:end carried no summary, using an empty one");
                }
                self.summary = summary;
                ReporterEvent::RunnerEnd
            }
        }
    }
}

impl<R> SummaryProvider for NdjsonSource<R> {
    fn summary(&self) -> RunSummary {
        self.summary.clone().unwrap_or_default()
    }
}

// --- NDJSON deserialization types ---

fn default_suite() -> String {
    "default".to_string()
}

#[derive(Debug, Deserialize)]
#[serde(tag = "event")]
enum EngineEvent {
    #[serde(rename = "suite:start")]
    SuiteStart {
        #[serde(default = "default_suite")]
        name: String,
    },
    #[serde(rename = "suite:end")]
    SuiteEnd,
    #[serde(rename = "group:start")]
    GroupStart(GroupHeader),
    #[serde(rename = "group:end")]
    GroupEnd,
    #[serde(rename = "test:start")]
    TestStart(TestStart),
    #[serde(rename = "test:end")]
    TestEnd(TestOutcome),
    #[serde(rename = "uncaught:exception")]
    UncaughtException { error: ErrorInfo },
    #[serde(rename = "runner:end")]
    RunnerEnd {
        #[serde(default)]
        summary: Option<RunSummary>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Title;

    async fn collect(input: &str) -> (Vec<ReporterEvent>, NdjsonSource<&[u8]>) {
        let mut source = NdjsonSource::new(input.as_bytes());
        let mut events = Vec::new();
        while let Some(event) = source.next_event().await.unwrap() {
            events.push(event);
        }
        (events, source)
    }

    #[tokio::test]
    async fn parses_every_event_kind() {
        let input = r#"
{"event":"suite:start","name":"unit"}
{"event":"group:start","title":"math","file_name":"tests/math.rs"}
{"event":"test:start","title":"adds","file_name":"tests/math.rs"}
{"event":"uncaught:exception","error":{"message":"boom"}}
{"event":"test:end","title":{"template":"adds {a}","expanded":"adds 1"},"has_error":true}
{"event":"group:end"}
{"event":"suite:end"}
{"event":"runner:end","summary":{"aggregates":{"total":1,"failed":1},"has_error":true}}
"#;
        let (events, source) = collect(input).await;
        let names: Vec<&str> = events.iter().map(|e| e.name()).collect();
        assert_eq!(
            names,
            [
                "suite:start",
                "group:start",
                "test:start",
                "uncaught:exception",
                "test:end",
                "group:end",
                "suite:end",
                "runner:end"
            ]
        );

        match &events[4] {
            ReporterEvent::TestEnd(outcome) => {
                assert_eq!(outcome.title.resolved(), "adds 1");
                assert!(matches!(outcome.title, Title::Templated { .. }));
                assert!(outcome.has_error);
            }
            other => panic!("unexpected event {:?}", other),
        }

        let summary = source.summary();
        assert_eq!(summary.aggregates.total, 1);
        assert!(summary.has_error);
    }

    #[tokio::test]
    async fn malformed_lines_are_skipped() {
        let input = "vitest banner\n{\"event\":\"suite:start\"}\n{\"event\":\"nope\"}\n\n";
        let (events, source) = collect(input).await;
        let suite_start = ReporterEvent::SuiteStart {
            name: "default".into(),
        };
        assert_eq!(events, [suite_start]);
        assert_eq!(source.skipped(), 2);
    }

    #[tokio::test]
    async fn missing_summary_falls_back_to_empty() {
        let (_, source) = collect("{\"event\":\"runner:end\"}\n").await;
        assert_eq!(source.summary(), RunSummary::default());
    }
}
