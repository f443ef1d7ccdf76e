// Unit tests for the syntax tree queries
// Tests function shapes, exception handlers and docstring detection

use app_review::error::ReviewError;
use app_review::syntax::{PythonParser, SourceParser, SyntaxTree};
use std::path::Path;

fn parse(source: &str) -> SyntaxTree {
    PythonParser
        .parse(source, Path::new("module.py"))
        .expect("Failed to parse")
}

#[test]
fn test_function_shapes() {
    let source = r#"
def plain(a, b):
    pass

def annotated(a: int, b) -> None:
    pass

def returns_only() -> int:
    return 1

async def fetch(url, *, timeout=3, **kwargs):
    """Fetch a url."""
    return url

def no_params():
    pass
"#;
    let functions = parse(source).functions();
    let names: Vec<_> = functions.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["plain", "annotated", "returns_only", "fetch", "no_params"]
    );

    let plain = &functions[0];
    assert_eq!(plain.line, 2);
    assert_eq!(plain.param_count, 2);
    assert_eq!(plain.annotated_params, 0);
    assert!(!plain.has_return_annotation);
    assert!(!plain.has_docstring);

    let annotated = &functions[1];
    assert_eq!(annotated.annotated_params, 1);
    assert!(annotated.has_return_annotation);

    assert!(functions[2].has_return_annotation);
    assert_eq!(functions[2].param_count, 0);

    let fetch = &functions[3];
    assert_eq!(fetch.name, "fetch");
    assert_eq!(fetch.param_count, 3);
    assert!(fetch.has_docstring);

    assert_eq!(functions[4].param_count, 0);
}

#[test]
fn test_methods_and_nested_functions_in_source_order() {
    let source = r#"
class Service:
    def __init__(self, name):
        self.name = name

    def run(self):
        def inner(x):
            return x
        return inner(self.name)

    def _private(self):
        pass
"#;
    let functions = parse(source).functions();
    let names: Vec<_> = functions.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["__init__", "run", "inner", "_private"]);
    assert!(functions[0].is_private());
    assert!(!functions[1].is_private());
    assert!(functions[3].is_private());
    assert_eq!(functions[2].line, 7);
}

#[test]
fn test_except_handlers() {
    let source = r#"
try:
    pass
except:
    pass

for item in range(3):
    if item:
        try:
            pass
        except (ValueError, KeyError):
            pass
        except Exception as exc:
            pass
        except:
            pass
        finally:
            pass

with open("f") as fh:
    while True:
        try:
            break
        except:
            try:
                pass
            except:
                pass
"#;
    let handlers = parse(source).except_handlers();
    let bare: Vec<_> = handlers.iter().filter(|h| h.is_bare).map(|h| h.line).collect();
    assert_eq!(handlers.len(), 6);
    assert_eq!(bare, vec![4, 15, 24, 27]);
}

#[test]
fn test_module_docstring() {
    assert!(parse("\"\"\"Module docs.\"\"\"\nx = 1\n").has_module_docstring());
    assert!(parse("'single quoted docs'\n").has_module_docstring());
    assert!(!parse("x = 1\n\"\"\"Not first.\"\"\"\n").has_module_docstring());
    assert!(!parse("\"\"\"   \"\"\"\n").has_module_docstring());
    assert!(!parse("").has_module_docstring());
}

#[test]
fn test_parse_error() {
    let err = PythonParser
        .parse("def broken(:\n", Path::new("broken.py"))
        .err()
        .expect("should not parse");
    match err {
        ReviewError::Parse { path, .. } => assert_eq!(path, Path::new("broken.py")),
        other => panic!("unexpected error: {other}"),
    }
}
