use serde::{Deserialize, Serialize};
use std::fmt;

/// How urgently a finding needs attention.
///
/// Variants are declared from most to least severe, so the derived ordering
/// sorts `Critical` first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
}

impl Severity {
    /// All severities, most severe first.
    pub const ALL: [Severity; 4] = [
        Severity::Critical,
        Severity::High,
        Severity::Medium,
        Severity::Low,
    ];

    /// Upper-case name used in every output encoding.
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Critical => "CRITICAL",
            Severity::High => "HIGH",
            Severity::Medium => "MEDIUM",
            Severity::Low => "LOW",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Functional bucket a finding belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    Bug,
    CodeQuality,
    Architecture,
    Testing,
    Documentation,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Bug,
        Category::CodeQuality,
        Category::Architecture,
        Category::Testing,
        Category::Documentation,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Bug => "BUG",
            Category::CodeQuality => "CODE_QUALITY",
            Category::Architecture => "ARCHITECTURE",
            Category::Testing => "TESTING",
            Category::Documentation => "DOCUMENTATION",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single finding produced by a rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    pub severity: Severity,
    pub category: Category,
    /// Path relative to the scan root, `/`-separated.
    pub file_path: String,
    /// 1-based line number, if the finding points at a line.
    pub line_number: Option<usize>,
    pub description: String,
    pub recommendation: Option<String>,
    /// Verbatim (stripped) source excerpt.
    pub code_snippet: Option<String>,
}

impl Issue {
    /// Creates an issue with no line, recommendation, or snippet.
    pub fn new(
        severity: Severity,
        category: Category,
        file_path: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            severity,
            category,
            file_path: file_path.into(),
            line_number: None,
            description: description.into(),
            recommendation: None,
            code_snippet: None,
        }
    }

    pub fn at_line(mut self, line: usize) -> Self {
        self.line_number = Some(line);
        self
    }

    pub fn with_recommendation(mut self, recommendation: impl Into<String>) -> Self {
        self.recommendation = Some(recommendation.into());
        self
    }

    pub fn with_snippet(mut self, snippet: impl Into<String>) -> Self {
        self.code_snippet = Some(snippet.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_orders_most_severe_first() {
        let mut sorted = vec![Severity::Low, Severity::Critical, Severity::Medium, Severity::High];
        sorted.sort();
        assert_eq!(sorted, Severity::ALL.to_vec());
    }

    #[test]
    fn enums_serialize_as_upper_case_names() {
        assert_eq!(serde_json::to_string(&Severity::Critical).unwrap(), "\"CRITICAL\"");
        assert_eq!(
            serde_json::to_string(&Category::CodeQuality).unwrap(),
            "\"CODE_QUALITY\""
        );
        for category in Category::ALL {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category.as_str()));
        }
    }

    #[test]
    fn absent_optional_fields_serialize_as_null() {
        let issue = Issue::new(Severity::Low, Category::Documentation, "README.md", "Missing README.md");
        let value = serde_json::to_value(&issue).unwrap();
        assert!(value["line_number"].is_null());
        assert!(value["recommendation"].is_null());
        assert!(value["code_snippet"].is_null());
        assert_eq!(value["file_path"], "README.md");
    }
}
