use crate::issue::{Category, Issue, Severity};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Summary used when a review finds nothing.
pub const CLEAN_SUMMARY: &str = "No issues found. Application looks good!";

pub const FIX_CRITICAL: &str = "Fix all CRITICAL issues before deployment";
pub const IMPROVE_TESTS: &str = "Improve test coverage";
pub const ADD_DOCS: &str = "Add missing documentation";

/// Aggregated outcome of one review run.
///
/// `total_issues == issues.len()`, and both count maps sum to it. The maps
/// only hold buckets that occur, in order of first occurrence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewResult {
    pub application_name: String,
    pub total_issues: usize,
    pub issues_by_severity: IndexMap<Severity, usize>,
    pub issues_by_category: IndexMap<Category, usize>,
    pub issues: Vec<Issue>,
    pub summary: String,
    pub recommendations: Vec<String>,
}

impl ReviewResult {
    /// Count for one severity, zero when absent.
    pub fn severity_count(&self, severity: Severity) -> usize {
        self.issues_by_severity.get(&severity).copied().unwrap_or(0)
    }

    pub fn category_count(&self, category: Category) -> usize {
        self.issues_by_category.get(&category).copied().unwrap_or(0)
    }

    /// Issues of one severity, in discovery order.
    pub fn issues_with_severity(&self, severity: Severity) -> impl Iterator<Item = &Issue> {
        self.issues.iter().filter(move |i| i.severity == severity)
    }
}

/// Reduces an ordered issue list into a [`ReviewResult`].
pub fn aggregate(application_name: impl Into<String>, issues: Vec<Issue>) -> ReviewResult {
    let mut issues_by_severity: IndexMap<Severity, usize> = IndexMap::new();
    let mut issues_by_category: IndexMap<Category, usize> = IndexMap::new();
    for issue in &issues {
        *issues_by_severity.entry(issue.severity).or_insert(0) += 1;
        *issues_by_category.entry(issue.category).or_insert(0) += 1;
    }

    let count = |s: Severity| issues_by_severity.get(&s).copied().unwrap_or(0);
    let critical = count(Severity::Critical);
    let high = count(Severity::High);

    let summary = if critical > 0 {
        format!(
            "CRITICAL: {} critical issues found. Immediate attention required.",
            critical
        )
    } else if high > 0 {
        format!("WARNING: {} high-priority issues found.", high)
    } else if !issues.is_empty() {
        format!(
            "Found {} issues, mostly code quality improvements.",
            issues.len()
        )
    } else {
        CLEAN_SUMMARY.to_string()
    };

    // Fixed priority order, independent of discovery order.
    let mut recommendations = Vec::new();
    if critical > 0 {
        recommendations.push(FIX_CRITICAL.to_string());
    }
    if issues_by_category.contains_key(&Category::Testing) {
        recommendations.push(IMPROVE_TESTS.to_string());
    }
    if issues_by_category.contains_key(&Category::Documentation) {
        recommendations.push(ADD_DOCS.to_string());
    }

    ReviewResult {
        application_name: application_name.into(),
        total_issues: issues.len(),
        issues_by_severity,
        issues_by_category,
        issues,
        summary,
        recommendations,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn issue(severity: Severity, category: Category) -> Issue {
        Issue::new(severity, category, "app.py", "something")
    }

    fn assert_counts_consistent(result: &ReviewResult) {
        assert_eq!(result.total_issues, result.issues.len());
        assert_eq!(result.issues_by_severity.values().sum::<usize>(), result.total_issues);
        assert_eq!(result.issues_by_category.values().sum::<usize>(), result.total_issues);
    }

    #[test]
    fn clean_result() {
        let result = aggregate("app", Vec::new());
        assert_eq!(result.summary, CLEAN_SUMMARY);
        assert!(result.recommendations.is_empty());
        assert!(result.issues_by_severity.is_empty());
        assert!(result.issues_by_category.is_empty());
        assert_counts_consistent(&result);
    }

    #[test]
    fn critical_takes_priority() {
        let result = aggregate(
            "app",
            vec![
                issue(Severity::High, Category::CodeQuality),
                issue(Severity::Critical, Category::Bug),
                issue(Severity::Critical, Category::Architecture),
            ],
        );
        assert_eq!(
            result.summary,
            "CRITICAL: 2 critical issues found. Immediate attention required."
        );
        assert_eq!(result.recommendations, vec![FIX_CRITICAL.to_string()]);
        assert_counts_consistent(&result);
    }

    #[test]
    fn high_without_critical_warns() {
        let result = aggregate("app", vec![issue(Severity::High, Category::Bug)]);
        assert_eq!(result.summary, "WARNING: 1 high-priority issues found.");
        assert!(result.recommendations.is_empty());
    }

    #[test]
    fn low_only_is_quality_summary() {
        let result = aggregate(
            "app",
            vec![
                issue(Severity::Low, Category::CodeQuality),
                issue(Severity::Medium, Category::CodeQuality),
            ],
        );
        assert_eq!(
            result.summary,
            "Found 2 issues, mostly code quality improvements."
        );
    }

    #[test]
    fn recommendations_follow_fixed_priority() {
        // Documentation and testing discovered before the critical issue.
        let result = aggregate(
            "app",
            vec![
                issue(Severity::Low, Category::Documentation),
                issue(Severity::Medium, Category::Testing),
                issue(Severity::Low, Category::Documentation),
                issue(Severity::Critical, Category::Bug),
            ],
        );
        assert_eq!(
            result.recommendations,
            vec![
                FIX_CRITICAL.to_string(),
                IMPROVE_TESTS.to_string(),
                ADD_DOCS.to_string()
            ]
        );
        assert_eq!(result.severity_count(Severity::Low), 2);
        assert_eq!(result.severity_count(Severity::High), 0);
        assert_eq!(result.category_count(Category::Documentation), 2);
        assert_counts_consistent(&result);
    }

    #[test]
    fn counts_keep_first_occurrence_order() {
        let result = aggregate(
            "app",
            vec![
                issue(Severity::Low, Category::Documentation),
                issue(Severity::Critical, Category::Bug),
                issue(Severity::Low, Category::Bug),
            ],
        );
        let severities: Vec<_> = result.issues_by_severity.keys().copied().collect();
        assert_eq!(severities, vec![Severity::Low, Severity::Critical]);
    }
}
