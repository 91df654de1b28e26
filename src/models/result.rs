use serde::{Deserialize, Serialize};

/// Title of a test as reported by the engine.
///
/// Plain titles arrive as JSON strings; templated titles arrive as an object
/// carrying the template and its already expanded rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Title {
    Literal(String),
    Templated { template: String, expanded: String },
}

impl Title {
    /// Text shown on the console. Templates are never re-expanded here.
    pub fn resolved(&self) -> &str {
        match self {
            Title::Literal(text) => text,
            Title::Templated { expanded, .. } => expanded,
        }
    }
}

impl Default for Title {
    fn default() -> Self {
        Title::Literal(String::new())
    }
}

impl From<&str> for Title {
    fn from(text: &str) -> Self {
        Title::Literal(text.to_string())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub stack: Option<String>,
}

impl ErrorInfo {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            name: None,
            message: message.into(),
            stack: None,
        }
    }
}

/// An error tagged with the lifecycle phase it was raised in ("test", "setup", ...).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseError {
    pub phase: String,
    pub error: ErrorInfo,
}

impl PhaseError {
    pub const TEST_PHASE: &'static str = "test";

    pub fn test(error: ErrorInfo) -> Self {
        Self {
            phase: Self::TEST_PHASE.to_string(),
            error,
        }
    }

    pub fn is_test_phase(&self) -> bool {
        self.phase == Self::TEST_PHASE
    }
}

/// Payload of `test:start`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TestStart {
    #[serde(default)]
    pub title: Title,
    #[serde(default)]
    pub file_name: Option<String>,
}

/// Payload of `test:end`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TestOutcome {
    pub title: Title,
    /// Milliseconds.
    pub duration: f64,
    pub is_todo: bool,
    pub is_failing: bool,
    pub has_error: bool,
    pub is_skipped: bool,
    pub is_pinned: bool,
    pub skip_reason: Option<String>,
    pub fail_reason: Option<String>,
    pub retry_attempt: Option<u32>,
    pub errors: Vec<PhaseError>,
}

impl TestOutcome {
    /// First error raised by the test body itself, if any.
    pub fn test_error(&self) -> Option<&PhaseError> {
        self.errors.iter().find(|e| e.is_test_phase())
    }
}

/// Payload of `group:start`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupHeader {
    pub title: String,
    #[serde(default)]
    pub file_name: Option<String>,
}
