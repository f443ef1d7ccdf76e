use crate::aggregate::{aggregate, ReviewResult};
use crate::config::ReviewConfig;
use crate::discovery::discover_files;
use crate::engine::{load_sources, ReviewContext, RuleEngine};
use crate::error::Result;
use crate::report::{render, OutputFormat};
use crate::rules::dependencies::{ModuleResolver, PythonModuleResolver};
use crate::syntax::{PythonParser, SourceParser};
use std::path::Path;
use tracing::info;

/// Runs a full review: discover files, apply the rule battery, aggregate.
pub struct Reviewer {
    config: ReviewConfig,
    engine: RuleEngine,
    parser: Box<dyn SourceParser>,
    resolver: Box<dyn ModuleResolver>,
}

impl Reviewer {
    /// Creates a reviewer with the stock rules, the Python parser, and a
    /// resolver that probes `config.python_interpreter`.
    pub fn new(config: ReviewConfig) -> Self {
        let resolver = PythonModuleResolver::new(config.python_interpreter.clone());
        Self {
            config,
            engine: RuleEngine::default(),
            parser: Box::new(PythonParser),
            resolver: Box::new(resolver),
        }
    }

    pub fn with_resolver(mut self, resolver: impl ModuleResolver + 'static) -> Self {
        self.resolver = Box::new(resolver);
        self
    }

    pub fn with_parser(mut self, parser: impl SourceParser + 'static) -> Self {
        self.parser = Box::new(parser);
        self
    }

    pub fn with_engine(mut self, engine: RuleEngine) -> Self {
        self.engine = engine;
        self
    }

    /// Reviews the project rooted at `root`.
    ///
    /// Never fails: a missing root or unreadable files only shrink what the
    /// rules can see.
    pub fn review(&self, root: &Path) -> ReviewResult {
        info!("Starting review of {}", root.display());

        let inventory = discover_files(root, &self.config);
        let sources = load_sources(root, &inventory, self.parser.as_ref());
        let ctx = ReviewContext {
            root,
            config: &self.config,
            inventory: &inventory,
            sources: &sources,
            resolver: self.resolver.as_ref(),
        };
        let issues = self.engine.run(&ctx);

        let result = aggregate(application_name(root), issues);
        info!(
            total = result.total_issues,
            files = inventory.len(),
            "Review of {} finished",
            root.display()
        );
        result
    }
}

impl Default for Reviewer {
    fn default() -> Self {
        Self::new(ReviewConfig::default())
    }
}

/// Last component of the root path, or the path itself when it has none
/// (e.g. `.` or `/`).
fn application_name(root: &Path) -> String {
    root.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| root.display().to_string())
}

/// Reviews `app_path` with the default reviewer and renders the result in
/// `mode` (`json`, `text` or `markdown`).
///
/// An unknown mode fails before any file is read.
pub fn review_application(app_path: &Path, mode: &str) -> Result<String> {
    let format: OutputFormat = mode.parse()?;
    let result = Reviewer::default().review(app_path);
    render(&result, format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ReviewError;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn review_application_renders_requested_mode() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("README.md"), "# App\n").unwrap();

        let json = review_application(dir.path(), "json").unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["total_issues"], 1);
        assert_eq!(value["issues"][0]["description"], "No tests directory found");

        let text = review_application(dir.path(), "text").unwrap();
        assert!(text.starts_with("Application Review: "));

        let markdown = review_application(dir.path(), "markdown").unwrap();
        assert!(markdown.contains("### MEDIUM Issues"));
    }

    #[test]
    fn review_application_rejects_unknown_mode() {
        let dir = tempdir().unwrap();
        let err = review_application(dir.path(), "xml").unwrap_err();
        assert!(matches!(err, ReviewError::UnknownFormat(mode) if mode == "xml"));
    }

    #[test]
    fn names_application_after_last_component() {
        assert_eq!(application_name(Path::new("/srv/apps/coffee_master")), "coffee_master");
        assert_eq!(application_name(Path::new("apps/kiosk/")), "kiosk");
    }
}
