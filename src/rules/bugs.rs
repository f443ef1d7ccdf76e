use crate::engine::{ReviewContext, SourceFile};
use crate::error::ReviewError;
use crate::issue::{Category, Issue, Severity};
use crate::rules::Rule;
use regex::Regex;

lazy_static::lazy_static! {
    /// Quoted absolute path literals: home directories, Windows drive roots,
    /// and single-component `/tmp/<name>` files.
    static ref ABSOLUTE_PATH_RE: Regex = Regex::new(
        r#"["'](?:/home(?:/[^"'\n]*)?|/Users(?:/[^"'\n]*)?|[A-Za-z]:\\[^"'\n]*|/tmp/[^/"'\n]+)["']"#
    ).unwrap();
}

/// Lines that build paths from parts are not hardcoded paths.
const PATH_CONSTRUCTORS: [&str; 2] = ["os.path.join", "Path("];

/// Flags imports of a known misspelling of a module that lives on the file's
/// own path.
pub struct ImportTypoRule;

impl ImportTypoRule {
    fn check_file<'s>(
        &self,
        ctx: &ReviewContext<'_>,
        file: &'s SourceFile,
    ) -> Result<Vec<Issue>, &'s ReviewError> {
        let content = file.content()?;
        let typo = ctx.config.misspelled_module.as_str();
        let correct = ctx.config.correct_module.as_str();

        // The correct spelling must appear in the file's path for the typo
        // to be an actual mistake rather than a different module.
        if !file.path.to_string_lossy().contains(correct) {
            return Ok(Vec::new());
        }

        let issues = content
            .split('\n')
            .enumerate()
            .filter(|(_, line)| line.contains("import") || line.contains("from"))
            .filter(|(_, line)| line.contains(typo))
            .map(|(i, line)| {
                Issue::new(
                    Severity::Critical,
                    Category::Bug,
                    &file.relative_path,
                    format!("Typo in module name: '{}' should be '{}'", typo, correct),
                )
                .at_line(i + 1)
                .with_recommendation("Fix import to use correct module name")
                .with_snippet(line.trim())
            })
            .collect();
        Ok(issues)
    }
}

impl Rule for ImportTypoRule {
    fn id(&self) -> &'static str {
        "import-typo"
    }

    fn check(&self, ctx: &ReviewContext<'_>) -> Vec<Issue> {
        ctx.per_file(self.id(), |file| self.check_file(ctx, file))
    }
}

/// Flags quoted absolute paths outside test code.
pub struct HardcodedPathRule;

impl HardcodedPathRule {
    fn check_file<'s>(&self, file: &'s SourceFile) -> Result<Vec<Issue>, &'s ReviewError> {
        if file.is_test {
            return Ok(Vec::new());
        }
        let content = file.content()?;

        let issues = content
            .split('\n')
            .enumerate()
            .filter(|(_, line)| ABSOLUTE_PATH_RE.is_match(line))
            .filter(|(_, line)| !PATH_CONSTRUCTORS.iter().any(|c| line.contains(c)))
            .map(|(i, line)| {
                Issue::new(
                    Severity::Critical,
                    Category::Bug,
                    &file.relative_path,
                    "Hardcoded absolute path detected",
                )
                .at_line(i + 1)
                .with_recommendation(
                    "Use relative paths with Path(__file__).parent or os.path.join",
                )
                .with_snippet(line.trim())
            })
            .collect();
        Ok(issues)
    }
}

impl Rule for HardcodedPathRule {
    fn id(&self) -> &'static str {
        "hardcoded-path"
    }

    fn check(&self, ctx: &ReviewContext<'_>) -> Vec<Issue> {
        ctx.per_file(self.id(), |file| self.check_file(file))
    }
}

/// Flags modules that open and load structured data from shared files without
/// any lock in sight.
pub struct ThreadSafetyRule;

impl ThreadSafetyRule {
    fn check_file<'s>(
        &self,
        ctx: &ReviewContext<'_>,
        file: &'s SourceFile,
    ) -> Result<Vec<Issue>, &'s ReviewError> {
        let content = file.content()?;
        let config = ctx.config;

        let does_file_io = content.contains("open(") && content.contains("json.load");
        let has_lock = config.lock_markers.iter().any(|m| content.contains(m.as_str()));
        let path = file.relative_path.to_lowercase();
        let owns_shared_state = config
            .shared_state_markers
            .iter()
            .any(|m| path.contains(m.as_str()));

        if !does_file_io || has_lock || !owns_shared_state {
            return Ok(Vec::new());
        }

        Ok(vec![Issue::new(
            Severity::High,
            Category::Bug,
            &file.relative_path,
            "File I/O operations without thread-safety mechanisms",
        )
        .with_recommendation("Add threading.Lock for concurrent access")])
    }
}

impl Rule for ThreadSafetyRule {
    fn id(&self) -> &'static str {
        "thread-safety"
    }

    fn check(&self, ctx: &ReviewContext<'_>) -> Vec<Issue> {
        ctx.per_file(self.id(), |file| self.check_file(ctx, file))
    }
}
