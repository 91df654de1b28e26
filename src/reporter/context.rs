use crate::models::{GroupHeader, PhaseError};

/// Presentation state for one run. Created empty, reset after `runner:end`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunContext {
    pub suite_name: Option<String>,
    /// File of the most recently started test.
    pub file_name: Option<String>,
    /// Set once the group's header has been printed.
    pub group_title: Option<String>,
    pub test_title: Option<String>,
    /// Group announced by the engine but not printed until its first test starts.
    pub pending_group: Option<GroupHeader>,
    /// File named by the last lone-file banner.
    pub printed_file_name: Option<String>,
    pub uncaught_exceptions: Vec<PhaseError>,
}

impl RunContext {
    /// Tests are indented when they sit under a group or a file banner.
    pub fn indented(&self) -> bool {
        self.group_title.is_some() || self.file_name.is_some()
    }

    /// A lone-file banner is due when no group or test is active and the file
    /// changed since the last banner.
    pub fn needs_file_banner(&self) -> bool {
        self.group_title.is_none()
            && self.test_title.is_none()
            && self.file_name.is_some()
            && self.file_name != self.printed_file_name
    }
}
