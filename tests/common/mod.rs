// Shared helpers for integration tests.
#![allow(dead_code)]

use app_review::rules::dependencies::StaticModuleResolver;
use app_review::{Category, Issue, Reviewer, Severity};
use std::fs;
use std::path::Path;

/// Reviewer that never shells out to a Python interpreter.
pub fn reviewer() -> Reviewer {
    Reviewer::default().with_resolver(StaticModuleResolver::default())
}

/// Writes `content` to `root/relative`, creating parent directories.
pub fn write(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

/// Adds a README and a populated tests directory so project-level rules stay
/// quiet.
pub fn scaffold(root: &Path) {
    write(root, "README.md", "# App\n");
    write(root, "tests/test_app.py", "def test_ok():\n    assert True\n");
}

pub fn matching<'a>(issues: &'a [Issue], severity: Severity, category: Category) -> Vec<&'a Issue> {
    issues
        .iter()
        .filter(|i| i.severity == severity && i.category == category)
        .collect()
}
