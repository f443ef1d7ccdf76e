// Lib file to expose modules for testing and external usage.
// This file serves as the root for the library crate.

/// Review orchestration: the `Reviewer` struct and `review_application`.
pub mod analyzer;

/// Reduction of findings into counts, a summary, and recommendations.
pub mod aggregate;

/// Tunable constants used by discovery and the rules.
pub mod config;

/// File discovery and classification.
pub mod discovery;

/// Rule execution: loaded sources, the review context, and the rule engine.
pub mod engine;

/// Error types.
pub mod error;

/// Finding data model.
pub mod issue;

/// Output encodings (JSON, text, markdown).
pub mod report;

/// The rule battery.
pub mod rules;

/// Syntax-tree parsing and queries.
pub mod syntax;

/// Line mapping and path helpers.
pub mod utils;

pub use aggregate::ReviewResult;
pub use analyzer::{review_application, Reviewer};
pub use config::ReviewConfig;
pub use error::{ReviewError, Result};
pub use issue::{Category, Issue, Severity};
pub use report::OutputFormat;
