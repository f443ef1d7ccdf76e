use crate::engine::{ReviewContext, SourceFile};
use crate::error::ReviewError;
use crate::issue::{Category, Issue, Severity};
use crate::rules::Rule;

/// Flags modules and public functions without a docstring. Test files are
/// skipped entirely.
pub struct DocstringRule;

impl DocstringRule {
    fn check_file<'s>(&self, file: &'s SourceFile) -> Result<Vec<Issue>, &'s ReviewError> {
        if file.is_test {
            return Ok(Vec::new());
        }
        let tree = file.tree()?;
        let mut issues = Vec::new();

        if !tree.has_module_docstring() {
            issues.push(
                Issue::new(
                    Severity::Low,
                    Category::Documentation,
                    &file.relative_path,
                    "Module missing docstring",
                )
                .at_line(1)
                .with_recommendation("Add module-level docstring"),
            );
        }

        for function in tree.functions() {
            if function.is_private() || function.has_docstring {
                continue;
            }
            issues.push(
                Issue::new(
                    Severity::Low,
                    Category::Documentation,
                    &file.relative_path,
                    format!("Function '{}' missing docstring", function.name),
                )
                .at_line(function.line)
                .with_recommendation("Add Google-style docstring"),
            );
        }
        Ok(issues)
    }
}

impl Rule for DocstringRule {
    fn id(&self) -> &'static str {
        "docstrings"
    }

    fn check(&self, ctx: &ReviewContext<'_>) -> Vec<Issue> {
        ctx.per_file(self.id(), |file| self.check_file(file))
    }
}

/// Flags a project without a top-level README.
pub struct ReadmeRule;

impl Rule for ReadmeRule {
    fn id(&self) -> &'static str {
        "readme"
    }

    fn check(&self, ctx: &ReviewContext<'_>) -> Vec<Issue> {
        let readme = &ctx.config.readme_file;
        if ctx.root.join(readme).is_file() {
            return Vec::new();
        }
        vec![Issue::new(
            Severity::Low,
            Category::Documentation,
            readme.as_str(),
            format!("Missing {}", readme),
        )
        .with_recommendation(format!("Create {} with usage instructions", readme))]
    }
}
