use crate::config::ReviewConfig;
use crate::discovery::FileInventory;
use crate::error::{ReviewError, Result};
use crate::issue::Issue;
use crate::rules::dependencies::ModuleResolver;
use crate::rules::Rule;
use crate::syntax::{SourceParser, SyntaxTree};
use crate::utils::{is_test_path, relative_display};
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

enum Loaded {
    Unreadable(ReviewError),
    Read {
        content: String,
        tree: Result<SyntaxTree>,
    },
}

/// A source file read (and parsed) once, shared by every rule.
pub struct SourceFile {
    pub path: PathBuf,
    /// Path relative to the scan root, as reported in findings.
    pub relative_path: String,
    pub is_test: bool,
    loaded: Loaded,
}

impl SourceFile {
    pub fn load(root: &Path, path: &Path, parser: &dyn SourceParser) -> Self {
        let loaded = match fs::read_to_string(path) {
            Ok(content) => {
                let tree = parser.parse(&content, path);
                Loaded::Read { content, tree }
            }
            Err(source) => Loaded::Unreadable(ReviewError::FileRead {
                path: path.to_path_buf(),
                source,
            }),
        };
        let relative_path = relative_display(root, path);
        Self {
            path: path.to_path_buf(),
            is_test: is_test_path(&relative_path),
            relative_path,
            loaded,
        }
    }

    pub fn content(&self) -> std::result::Result<&str, &ReviewError> {
        match &self.loaded {
            Loaded::Read { content, .. } => Ok(content),
            Loaded::Unreadable(err) => Err(err),
        }
    }

    pub fn tree(&self) -> std::result::Result<&SyntaxTree, &ReviewError> {
        match &self.loaded {
            Loaded::Read { tree: Ok(tree), .. } => Ok(tree),
            Loaded::Read { tree: Err(err), .. } | Loaded::Unreadable(err) => Err(err),
        }
    }
}

/// Reads and parses every source file of the inventory in parallel, keeping
/// inventory order.
pub fn load_sources(
    root: &Path,
    inventory: &FileInventory,
    parser: &dyn SourceParser,
) -> Vec<SourceFile> {
    inventory
        .source_files
        .par_iter()
        .map(|path| SourceFile::load(root, path, parser))
        .collect()
}

/// Everything a rule may look at during one review run.
pub struct ReviewContext<'a> {
    pub root: &'a Path,
    pub config: &'a ReviewConfig,
    pub inventory: &'a FileInventory,
    pub sources: &'a [SourceFile],
    pub resolver: &'a dyn ModuleResolver,
}

impl<'a> ReviewContext<'a> {
    /// Runs `check` over every source file and concatenates the findings in
    /// file order.
    ///
    /// A file whose check fails is logged at debug level and contributes
    /// nothing; the other files are unaffected.
    pub fn per_file<F>(&self, rule: &str, check: F) -> Vec<Issue>
    where
        F: for<'s> Fn(&'s SourceFile) -> std::result::Result<Vec<Issue>, &'s ReviewError>
            + Sync,
    {
        let per_file: Vec<Vec<Issue>> = self
            .sources
            .par_iter()
            .map(|file| match check(file) {
                Ok(issues) => issues,
                Err(err) => {
                    debug!(rule, file = %file.relative_path, "Skipping file: {}", err);
                    Vec::new()
                }
            })
            .collect();
        per_file.into_iter().flatten().collect()
    }
}

/// An explicit, ordered battery of rules.
pub struct RuleEngine {
    rules: Vec<Box<dyn Rule>>,
}

impl RuleEngine {
    pub fn new(rules: Vec<Box<dyn Rule>>) -> Self {
        Self { rules }
    }

    pub fn rule_ids(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.id()).collect()
    }

    /// Runs every rule in registration order. Findings are ordered rule-major,
    /// file-minor.
    pub fn run(&self, ctx: &ReviewContext<'_>) -> Vec<Issue> {
        let mut issues = Vec::new();
        for rule in &self.rules {
            let found = rule.check(ctx);
            debug!(rule = rule.id(), count = found.len(), "Rule finished");
            issues.extend(found);
        }
        issues
    }
}

impl Default for RuleEngine {
    fn default() -> Self {
        Self::new(crate::rules::default_rules())
    }
}
