use crate::aggregate::ReviewResult;
use crate::error::{ReviewError, Result};
use crate::issue::{Category, Issue, Severity};
use clap::ValueEnum;

/// Output encodings selectable by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON mirroring `ReviewResult`.
    #[default]
    Json,
    /// Plain text for terminals.
    Text,
    /// Markdown document grouped by severity.
    Markdown,
}

impl std::str::FromStr for OutputFormat {
    type Err = ReviewError;

    /// Accepts the same lower-case names as the command line.
    fn from_str(s: &str) -> Result<Self> {
        <Self as ValueEnum>::from_str(s, false)
            .map_err(|_| ReviewError::UnknownFormat(s.to_string()))
    }
}

/// Renders a result in the requested encoding.
pub fn render(result: &ReviewResult, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => render_json(result),
        OutputFormat::Text => Ok(render_text(result)),
        OutputFormat::Markdown => Ok(render_markdown(result)),
    }
}

pub fn render_json(result: &ReviewResult) -> Result<String> {
    Ok(serde_json::to_string_pretty(result)?)
}

const RULE: &str = "============================================================";

pub fn render_text(result: &ReviewResult) -> String {
    let mut lines = vec![
        format!("Application Review: {}", result.application_name),
        RULE.to_string(),
        format!("Summary: {}", result.summary),
        String::new(),
        format!("Total Issues: {}", result.total_issues),
    ];
    for severity in Severity::ALL {
        lines.push(format!(
            "  {}: {}",
            title_case(severity.as_str()),
            result.severity_count(severity)
        ));
    }
    if !result.issues_by_category.is_empty() {
        lines.push("By Category:".to_string());
        for category in present_categories(result) {
            lines.push(format!("  {}: {}", category, result.category_count(category)));
        }
    }
    lines.push(String::new());
    lines.push("Issues:".to_string());
    lines.push(String::new());

    for issue in &result.issues {
        lines.push(format!("[{}] {}", issue.severity, issue.file_path));
        lines.push(match issue.line_number {
            Some(line) => format!("  Line {}: {}", line, issue.description),
            None => format!("  {}", issue.description),
        });
        lines.push(format!("  Category: {}", issue.category));
        if let Some(rec) = &issue.recommendation {
            lines.push(format!("  -> {}", rec));
        }
        if let Some(snippet) = &issue.code_snippet {
            lines.push(format!("  | {}", snippet));
        }
        lines.push(String::new());
    }

    if !result.recommendations.is_empty() {
        lines.push("Recommendations:".to_string());
        for rec in &result.recommendations {
            lines.push(format!("  - {}", rec));
        }
    }
    finish(lines)
}

pub fn render_markdown(result: &ReviewResult) -> String {
    let mut lines = vec![
        format!("# Application Review: {}", result.application_name),
        String::new(),
        format!("**Summary**: {}", result.summary),
        String::new(),
        "## Statistics".to_string(),
        String::new(),
        format!("- Total Issues: {}", result.total_issues),
    ];
    for severity in Severity::ALL {
        lines.push(format!(
            "- {}: {}",
            title_case(severity.as_str()),
            result.severity_count(severity)
        ));
    }
    for category in present_categories(result) {
        lines.push(format!("- {}: {}", category, result.category_count(category)));
    }
    lines.push(String::new());
    lines.push("## Issues".to_string());
    lines.push(String::new());

    for severity in Severity::ALL {
        let mut grouped = result.issues_with_severity(severity).peekable();
        if grouped.peek().is_none() {
            continue;
        }
        lines.push(format!("### {} Issues", severity));
        lines.push(String::new());
        for issue in grouped {
            push_markdown_issue(&mut lines, issue);
        }
    }

    if !result.recommendations.is_empty() {
        lines.push("## Recommendations".to_string());
        lines.push(String::new());
        for rec in &result.recommendations {
            lines.push(format!("- {}", rec));
        }
        lines.push(String::new());
    }
    finish(lines)
}

fn push_markdown_issue(lines: &mut Vec<String>, issue: &Issue) {
    lines.push(format!("#### {}", issue.file_path));
    lines.push(match issue.line_number {
        Some(line) => format!("**Line {}**: {}", line, issue.description),
        None => format!("**{}**", issue.description),
    });
    lines.push(format!("- Category: {}", issue.category));
    if let Some(rec) = &issue.recommendation {
        lines.push(format!("- Recommendation: {}", rec));
    }
    if let Some(snippet) = &issue.code_snippet {
        lines.push("```python".to_string());
        lines.push(snippet.clone());
        lines.push("```".to_string());
    }
    lines.push(String::new());
}

/// Joins rendered lines, newline-terminated.
fn finish(lines: Vec<String>) -> String {
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn present_categories(result: &ReviewResult) -> impl Iterator<Item = Category> + '_ {
    Category::ALL
        .into_iter()
        .filter(|c| result.issues_by_category.contains_key(c))
}

/// `CRITICAL` -> `Critical`.
fn title_case(name: &str) -> String {
    let lower = name.to_lowercase();
    let mut chars = lower.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
