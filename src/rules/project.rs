use crate::engine::{ReviewContext, SourceFile};
use crate::error::ReviewError;
use crate::issue::{Category, Issue, Severity};
use crate::rules::Rule;
use std::fs;
use tracing::debug;

/// Flags modules that carry tunable constants while the project has no
/// root-level config file to hold them.
///
/// Only the one config file name is recognised; projects configured through
/// environment variables or other files still get flagged.
pub struct ConfigurationRule;

impl ConfigurationRule {
    fn check_file<'s>(
        &self,
        ctx: &ReviewContext<'_>,
        file: &'s SourceFile,
    ) -> Result<Vec<Issue>, &'s ReviewError> {
        let content = file.content()?;
        let config = ctx.config;

        let has_tunables = config
            .tunable_constants
            .iter()
            .any(|c| content.contains(c.as_str()));
        if !has_tunables || content.contains(config.config_file_name.as_str()) {
            return Ok(Vec::new());
        }

        Ok(vec![Issue::new(
            Severity::Medium,
            Category::Architecture,
            &file.relative_path,
            "Hardcoded configuration values",
        )
        .with_recommendation(format!(
            "Move tunable parameters to {}",
            config.config_file_name
        ))])
    }
}

impl Rule for ConfigurationRule {
    fn id(&self) -> &'static str {
        "configuration"
    }

    fn check(&self, ctx: &ReviewContext<'_>) -> Vec<Issue> {
        let project_config = ctx.root.join(&ctx.config.config_file_name);
        if ctx.inventory.config_files.contains(&project_config) {
            return Vec::new();
        }
        ctx.per_file(self.id(), |file| self.check_file(ctx, file))
    }
}

/// Flags a project without a tests directory, or with one that holds no
/// `test_*.py` files at its top level.
pub struct TestCoverageRule;

impl Rule for TestCoverageRule {
    fn id(&self) -> &'static str {
        "test-coverage"
    }

    fn check(&self, ctx: &ReviewContext<'_>) -> Vec<Issue> {
        let config = ctx.config;
        let tests_dir = ctx.root.join(&config.tests_dir);
        let location = format!("{}/", config.tests_dir);

        if !tests_dir.is_dir() {
            return vec![Issue::new(
                Severity::Medium,
                Category::Testing,
                location,
                "No tests directory found",
            )
            .with_recommendation("Create tests directory with functional tests")];
        }

        let entries = match fs::read_dir(&tests_dir) {
            Ok(entries) => entries,
            Err(err) => {
                debug!(rule = self.id(), "Cannot list {}: {}", tests_dir.display(), err);
                return Vec::new();
            }
        };

        let has_test_files = entries.filter_map(|e| e.ok()).any(|entry| {
            let name = entry.file_name();
            let name = name.to_string_lossy();
            entry.path().is_file()
                && name.starts_with(config.test_file_prefix.as_str())
                && name.ends_with(config.test_file_suffix.as_str())
        });

        if has_test_files {
            return Vec::new();
        }
        vec![Issue::new(
            Severity::Medium,
            Category::Testing,
            location,
            "No test files found",
        )
        .with_recommendation("Add pytest test files")]
    }
}
