pub mod result;
pub mod status;
pub mod summary;
pub mod tree;

pub use result::{ErrorInfo, GroupHeader, PhaseError, TestOutcome, TestStart, Title};
pub use status::OutcomeKind;
pub use summary::{Aggregates, RunSummary};
pub use tree::{FailureNode, SuiteNode, TestNode};
