use crate::engine::{ReviewContext, SourceFile};
use crate::error::ReviewError;
use crate::issue::{Category, Issue, Severity};
use crate::rules::Rule;

/// Flags `except:` clauses that catch everything.
pub struct BareExceptRule;

impl BareExceptRule {
    fn check_file<'s>(&self, file: &'s SourceFile) -> Result<Vec<Issue>, &'s ReviewError> {
        let tree = file.tree()?;
        let issues = tree
            .except_handlers()
            .into_iter()
            .filter(|h| h.is_bare)
            .map(|h| {
                Issue::new(
                    Severity::High,
                    Category::CodeQuality,
                    &file.relative_path,
                    "Bare except clause detected",
                )
                .at_line(h.line)
                .with_recommendation("Use specific exception types (e.g., except ValueError:)")
            })
            .collect();
        Ok(issues)
    }
}

impl Rule for BareExceptRule {
    fn id(&self) -> &'static str {
        "bare-except"
    }

    fn check(&self, ctx: &ReviewContext<'_>) -> Vec<Issue> {
        ctx.per_file(self.id(), |file| self.check_file(file))
    }
}

/// Flags statements that start with a `print(` call in non-test code.
///
/// Severity is HIGH when the module never imports `logging`, since there is
/// no logger to switch to yet.
pub struct PrintStatementRule;

impl PrintStatementRule {
    fn check_file<'s>(&self, file: &'s SourceFile) -> Result<Vec<Issue>, &'s ReviewError> {
        if file.is_test {
            return Ok(Vec::new());
        }
        let content = file.content()?;
        let has_logging = content.contains("import logging") || content.contains("from logging");
        let severity = if has_logging {
            Severity::Medium
        } else {
            Severity::High
        };

        let issues = content
            .split('\n')
            .enumerate()
            .filter(|(_, line)| line.trim().starts_with("print("))
            .map(|(i, line)| {
                Issue::new(
                    severity,
                    Category::CodeQuality,
                    &file.relative_path,
                    "Print statement found instead of logging",
                )
                .at_line(i + 1)
                .with_recommendation("Replace with logger.info/debug/error")
                .with_snippet(line.trim())
            })
            .collect();
        Ok(issues)
    }
}

impl Rule for PrintStatementRule {
    fn id(&self) -> &'static str {
        "print-statement"
    }

    fn check(&self, ctx: &ReviewContext<'_>) -> Vec<Issue> {
        ctx.per_file(self.id(), |file| self.check_file(file))
    }
}

/// Flags public functions that take parameters but annotate neither them nor
/// the return type.
pub struct TypeHintRule;

impl TypeHintRule {
    fn check_file<'s>(&self, file: &'s SourceFile) -> Result<Vec<Issue>, &'s ReviewError> {
        if file.is_test {
            return Ok(Vec::new());
        }
        let tree = file.tree()?;
        let issues = tree
            .functions()
            .into_iter()
            // `__init__` and other dunders fall under the private check.
            .filter(|f| !f.is_private())
            .filter(|f| f.param_count > 0 && !f.has_return_annotation && f.annotated_params == 0)
            .map(|f| {
                Issue::new(
                    Severity::Low,
                    Category::CodeQuality,
                    &file.relative_path,
                    format!("Function '{}' missing type hints", f.name),
                )
                .at_line(f.line)
                .with_recommendation("Add type hints for parameters and return type")
            })
            .collect();
        Ok(issues)
    }
}

impl Rule for TypeHintRule {
    fn id(&self) -> &'static str {
        "type-hints"
    }

    fn check(&self, ctx: &ReviewContext<'_>) -> Vec<Issue> {
        ctx.per_file(self.id(), |file| self.check_file(file))
    }
}
