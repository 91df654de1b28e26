use crossterm::style::Color;

use super::result::TestOutcome;
use crate::ui::theme;

/// Presentation category of a finished test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutcomeKind {
    Todo,
    /// Marked as failing and did fail, which counts as a pass.
    FailedAsExpected,
    /// Marked as failing but finished without an error.
    UnexpectedPass,
    Failed,
    Skipped,
    Passed,
}

impl OutcomeKind {
    /// Classify an outcome. Todo > failing > error > skipped > passed.
    pub fn of(outcome: &TestOutcome) -> Self {
        if outcome.is_todo {
            OutcomeKind::Todo
        } else if outcome.is_failing {
            if outcome.has_error {
                OutcomeKind::FailedAsExpected
            } else {
                OutcomeKind::UnexpectedPass
            }
        } else if outcome.has_error {
            OutcomeKind::Failed
        } else if outcome.is_skipped {
            OutcomeKind::Skipped
        } else {
            OutcomeKind::Passed
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            OutcomeKind::Todo => "ℹ",
            OutcomeKind::FailedAsExpected => "◼",
            OutcomeKind::UnexpectedPass | OutcomeKind::Failed => "✖",
            OutcomeKind::Skipped => "●",
            OutcomeKind::Passed => "✔",
        }
    }

    pub fn icon_color(&self) -> Color {
        match self {
            OutcomeKind::Todo => theme::TEAL,
            OutcomeKind::FailedAsExpected => theme::MAUVE,
            OutcomeKind::UnexpectedPass | OutcomeKind::Failed => theme::RED,
            OutcomeKind::Skipped => theme::YELLOW,
            OutcomeKind::Passed => theme::GREEN,
        }
    }

    pub fn message_color(&self) -> Color {
        match self {
            OutcomeKind::Todo => theme::BLUE,
            OutcomeKind::Passed => theme::OVERLAY0,
            other => other.icon_color(),
        }
    }
}
