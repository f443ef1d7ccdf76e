use rustpython_ast::TextSize;
use std::path::{Component, Path};

/// Maps byte offsets reported by the parser to 1-based line numbers.
pub struct LineIndex {
    /// Byte offset of the start of each line.
    line_starts: Vec<usize>,
}

impl LineIndex {
    pub fn new(source: &str) -> Self {
        let mut line_starts = vec![0];
        for (i, byte) in source.bytes().enumerate() {
            if byte == b'\n' {
                line_starts.push(i + 1);
            }
        }
        Self { line_starts }
    }

    /// Converts a byte offset to a 1-based line number.
    pub fn line_number(&self, offset: TextSize) -> usize {
        let offset = offset.to_usize();
        match self.line_starts.binary_search(&offset) {
            Ok(line) => line + 1,
            Err(line) => line,
        }
    }
}

/// Renders `path` relative to `root` with `/` separators, so findings read the
/// same on every platform. Falls back to the full path if `path` lies outside
/// `root`.
pub fn relative_display(root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// A file counts as test code when its root-relative path mentions "test"
/// anywhere (directory or file name, any case).
pub fn is_test_path(relative_path: &str) -> bool {
    relative_path.to_lowercase().contains("test")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_offsets_to_lines() {
        let source = "a = 1\nb = 2\n\nc = 3\n";
        let index = LineIndex::new(source);
        assert_eq!(index.line_number(TextSize::from(0)), 1);
        assert_eq!(index.line_number(TextSize::from(4)), 1);
        assert_eq!(index.line_number(TextSize::from(6)), 2);
        assert_eq!(index.line_number(TextSize::from(12)), 3);
        assert_eq!(index.line_number(TextSize::from(13)), 4);
    }

    #[test]
    fn relative_paths_use_forward_slashes() {
        let root = Path::new("/srv/app");
        let file = root.join("pkg").join("module.py");
        assert_eq!(relative_display(root, &file), "pkg/module.py");
    }

    #[test]
    fn test_paths_are_detected_case_insensitively() {
        assert!(is_test_path("tests/test_api.py"));
        assert!(is_test_path("pkg/MyTestHelpers.py"));
        assert!(is_test_path("conftest.py"));
        assert!(!is_test_path("pkg/service.py"));
    }
}
