// Rules module
// Each rule is an independent check over the review context. The registry
// below fixes the order in which they run.

use crate::engine::ReviewContext;
use crate::issue::Issue;

/// Textual bug checks: import typos, hardcoded paths, unsynchronized shared files.
pub mod bugs;

/// Code quality checks: bare excepts, print calls, missing type hints.
pub mod quality;

/// Documentation checks: module/function docstrings and the README.
pub mod docs;

/// Project layout checks: externalized configuration and the tests directory.
pub mod project;

/// Optional vendor module probes.
pub mod dependencies;

/// One independent check producing zero or more findings.
///
/// Rules must not depend on each other's output.
pub trait Rule: Send + Sync {
    /// Stable identifier, used in logs.
    fn id(&self) -> &'static str;

    fn check(&self, ctx: &ReviewContext<'_>) -> Vec<Issue>;
}

/// The stock rule battery, in execution order.
pub fn default_rules() -> Vec<Box<dyn Rule>> {
    vec![
        Box::new(bugs::ImportTypoRule),
        Box::new(bugs::HardcodedPathRule),
        Box::new(quality::BareExceptRule),
        Box::new(quality::PrintStatementRule),
        Box::new(quality::TypeHintRule),
        Box::new(docs::DocstringRule),
        Box::new(bugs::ThreadSafetyRule),
        Box::new(project::ConfigurationRule),
        Box::new(project::TestCoverageRule),
        Box::new(docs::ReadmeRule),
        Box::new(dependencies::VendorDependencyRule),
    ]
}
