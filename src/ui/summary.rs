use super::RenderOptions;
use super::format_elapsed;
use super::theme;
use crate::models::RunSummary;

pub const NO_TESTS: &str = "NO TESTS EXECUTED";
pub const FAILED: &str = "FAILED";
pub const PASSED: &str = "PASSED";

/// `label : value` rows in display order. Zero counters are omitted; the
/// duration row is always present.
pub fn aggregate_rows(summary: &RunSummary) -> Vec<(&'static str, String)> {
    let a = &summary.aggregates;
    let counters = [
        ("total", a.total),
        ("failed", a.failed),
        ("passed", a.passed),
        ("todo", a.todo),
        ("skipped", a.skipped),
        ("regression", a.regression),
        ("uncaught exceptions", a.uncaught_exceptions),
    ];

    let mut rows: Vec<(&'static str, String)> = counters
        .into_iter()
        .filter(|(_, count)| *count > 0)
        .map(|(label, count)| (label, count.to_string()))
        .collect();
    rows.push(("duration", format_elapsed(summary.duration)));
    rows
}

fn banner(text: &str, options: &RenderOptions) -> String {
    let background = match text {
        PASSED => theme::GREEN,
        FAILED => theme::RED,
        _ => theme::YELLOW,
    };
    let padded = format!(" {:<width$}", text, width = options.width.saturating_sub(1));
    options.painter().badge(padded, background)
}

/// Status banner followed by the aligned aggregate rows.
pub fn render(summary: &RunSummary, options: &RenderOptions) -> Vec<String> {
    if summary.aggregates.total == 0 {
        return vec![String::new(), banner(NO_TESTS, options)];
    }

    let status = if summary.has_error { FAILED } else { PASSED };
    let mut lines = vec![String::new(), banner(status, options), String::new()];

    let rows = aggregate_rows(summary);
    let width = rows.iter().map(|(label, _)| label.len()).max().unwrap_or(0);
    let painter = options.painter();
    for (label, value) in rows {
        lines.push(painter.dim(format!("{:>width$} : {}", label, value, width = width)));
    }

    lines.push(String::new());
    lines
}
