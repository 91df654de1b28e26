use crossterm::style::Color;

use super::theme::{self, Painter};
use super::{INDENT, format_elapsed};
use crate::models::{OutcomeKind, TestOutcome};

pub const FAILING_WITHOUT_ERROR: &str = "test marked to fail must finish with an error";

const PIN_MARKER: &str = "📌 ";

/// Explanation printed under a test line, if any, with its color. Skip
/// reasons are yellow and failing-test explanations mauve, whatever the
/// outcome kind.
pub fn subtext(outcome: &TestOutcome) -> Option<(&str, Color)> {
    if outcome.is_skipped
        && let Some(reason) = outcome.skip_reason.as_deref()
    {
        return Some((reason, theme::YELLOW));
    }

    if !outcome.is_failing {
        return None;
    }

    let text = if !outcome.has_error {
        FAILING_WITHOUT_ERROR
    } else if let Some(reason) = outcome.fail_reason.as_deref() {
        reason
    } else {
        outcome.test_error()?.error.message.as_str()
    };
    Some((text, theme::MAUVE))
}

/// `(xN) ` marker for retried tests; empty for first attempts.
pub fn retry_marker(outcome: &TestOutcome) -> String {
    match outcome.retry_attempt {
        Some(attempt) if attempt > 1 => format!("(x{}) ", attempt),
        _ => String::new(),
    }
}

/// Render the line for a finished test plus its optional subtext line.
pub fn render(outcome: &TestOutcome, indented: bool, painter: &Painter) -> Vec<String> {
    let kind = OutcomeKind::of(outcome);
    let indentation = if indented { INDENT } else { "" };

    let icon = painter.fg(kind.icon(), kind.icon_color());
    let pin = if outcome.is_pinned {
        painter.fg(PIN_MARKER, theme::PEACH)
    } else {
        String::new()
    };
    let retry = painter.dim(retry_marker(outcome));
    let message = painter.fg(outcome.title.resolved(), kind.message_color());
    let duration = painter.dim(format!("({})", format_elapsed(outcome.duration)));

    let mut lines = vec![format!(
        "{}{}  {}{}{} {}",
        indentation, icon, pin, retry, message, duration
    )];

    if let Some((text, color)) = subtext(outcome) {
        lines.push(format!("{}   {}", indentation, painter.fg(text, color)));
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ErrorInfo, PhaseError, Title};

    fn plain() -> Painter {
        Painter::new(false)
    }

    fn failing(has_error: bool) -> TestOutcome {
        TestOutcome {
            title: "divides".into(),
            is_failing: true,
            has_error,
            errors: vec![PhaseError::test(ErrorInfo::new("division by zero"))],
            ..Default::default()
        }
    }

    #[test]
    fn passing_test_renders_single_line() {
        let outcome = TestOutcome {
            title: "adds".into(),
            duration: 12.0,
            ..Default::default()
        };
        assert_eq!(render(&outcome, false, &plain()), ["✔  adds (12ms)"]);
    }

    #[test]
    fn indented_test_puts_subtext_one_level_deeper() {
        let outcome = TestOutcome {
            title: "later".into(),
            is_skipped: true,
            skip_reason: Some("flaky on CI".into()),
            ..Default::default()
        };
        assert_eq!(
            render(&outcome, true, &plain()),
            ["  ●  later (0s)", "     flaky on CI"]
        );
    }

    #[test]
    fn skipped_without_reason_has_no_subtext() {
        let outcome = TestOutcome {
            is_skipped: true,
            ..Default::default()
        };
        assert_eq!(subtext(&outcome), None);
    }

    #[test]
    fn failing_without_error_reports_fixed_diagnostic() {
        let mut outcome = failing(false);
        outcome.fail_reason = Some("known bug".into());
        let expected = (FAILING_WITHOUT_ERROR, theme::MAUVE);
        assert_eq!(subtext(&outcome), Some(expected));
        assert!(FAILING_WITHOUT_ERROR.starts_with("test marked to fail"));
    }

    #[test]
    fn failing_with_error_prefers_fail_reason() {
        let mut outcome = failing(true);
        let expected = ("division by zero", theme::MAUVE);
        assert_eq!(subtext(&outcome), Some(expected));
        outcome.fail_reason = Some("known bug #12".into());
        let expected = ("known bug #12", theme::MAUVE);
        assert_eq!(subtext(&outcome), Some(expected));
    }

    #[test]
    fn skip_reason_is_yellow_even_when_the_test_errored() {
        let outcome = TestOutcome {
            title: "uploads".into(),
            has_error: true,
            is_skipped: true,
            skip_reason: Some("blocked by #40".into()),
            ..Default::default()
        };
        assert_eq!(OutcomeKind::of(&outcome), OutcomeKind::Failed);
        assert_eq!(subtext(&outcome), Some(("blocked by #40", theme::YELLOW)));
    }

    #[test]
    fn failing_with_only_hook_errors_has_no_subtext() {
        let mut outcome = failing(true);
        outcome.errors[0].phase = "setup".into();
        assert_eq!(subtext(&outcome), None);
    }

    #[test]
    fn retry_marker_only_after_first_attempt() {
        let mut outcome = TestOutcome {
            title: "flaky".into(),
            retry_attempt: Some(3),
            ..Default::default()
        };
        assert!(render(&outcome, false, &plain())[0].contains("(x3) flaky"));

        for attempt in [None, Some(0), Some(1)] {
            outcome.retry_attempt = attempt;
            assert!(!render(&outcome, false, &plain())[0].contains("(x"));
        }
    }

    #[test]
    fn pin_marker_precedes_retry_marker() {
        let outcome = TestOutcome {
            title: "focused".into(),
            is_pinned: true,
            retry_attempt: Some(2),
            ..Default::default()
        };
        assert!(render(&outcome, false, &plain())[0].contains("📌 (x2) focused"));
    }

    #[test]
    fn templated_title_uses_expanded_text() {
        let outcome = TestOutcome {
            title: Title::Templated {
                template: "add {a}".into(),
                expanded: "add 2".into(),
            },
            ..Default::default()
        };
        let line = &render(&outcome, false, &plain())[0];
        assert!(line.contains("add 2"));
        assert!(!line.contains("{a}"));
    }
}
