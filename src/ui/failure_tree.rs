use crate::models::{FailureNode, PhaseError, RunSummary};

pub const RUNNER_HEADING: &str = "Tests Runner";
pub const UNCAUGHT_HEADING: &str = "Uncaught exception";

/// A heading and the errors to hand to the errors printer under it.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorSection<'a> {
    pub heading: &'a str,
    pub errors: &'a [PhaseError],
}

/// Every error section of the end-of-run report, in print order: runner
/// errors, the failure tree walked depth first, then uncaught exceptions.
/// When nothing ran the failure tree is left out.
pub fn sections<'a>(summary: &'a RunSummary, uncaught: &'a [PhaseError]) -> Vec<ErrorSection<'a>> {
    let mut out = vec![ErrorSection {
        heading: RUNNER_HEADING,
        errors: &summary.runner_errors,
    }];

    if summary.aggregates.total > 0 {
        for suite in &summary.failure_tree {
            out.push(ErrorSection {
                heading: &suite.name,
                errors: &suite.errors,
            });

            for child in &suite.children {
                match child {
                    FailureNode::Group {
                        name,
                        errors,
                        children,
                    } => {
                        out.push(ErrorSection {
                            heading: name,
                            errors,
                        });
                        for test in children {
                            out.push(ErrorSection {
                                heading: &test.title,
                                errors: &test.errors,
                            });
                        }
                    }
                    FailureNode::Test(test) => out.push(ErrorSection {
                        heading: &test.title,
                        errors: &test.errors,
                    }),
                }
            }
        }
    }

    out.push(ErrorSection {
        heading: UNCAUGHT_HEADING,
        errors: uncaught,
    });
    out
}
