use serde::{Deserialize, Serialize};

use super::result::PhaseError;

/// Top-level node of the failure tree. Only nodes with errors are present.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SuiteNode {
    pub name: String,
    #[serde(default)]
    pub errors: Vec<PhaseError>,
    #[serde(default)]
    pub children: Vec<FailureNode>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum FailureNode {
    Group {
        name: String,
        #[serde(default)]
        errors: Vec<PhaseError>,
        #[serde(default)]
        children: Vec<TestNode>,
    },
    Test(TestNode),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TestNode {
    pub title: String,
    #[serde(default)]
    pub errors: Vec<PhaseError>,
}
