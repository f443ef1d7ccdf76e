use crate::config::VendorModule;
use crate::engine::ReviewContext;
use crate::issue::{Category, Issue, Severity};
use crate::rules::Rule;
use std::collections::HashSet;
use std::process::{Command, Stdio};
use tracing::debug;

/// Answers whether a module can be resolved in the host environment.
///
/// Implementations must never fail: an unanswerable probe counts as
/// "not resolvable".
pub trait ModuleResolver: Send + Sync {
    fn is_resolvable(&self, module: &str) -> bool;
}

/// Asks a Python interpreter to locate the module with
/// `importlib.util.find_spec`. The module itself is never imported.
#[derive(Debug, Clone)]
pub struct PythonModuleResolver {
    interpreter: String,
}

const FIND_SPEC: &str =
    "import importlib.util, sys; sys.exit(0 if importlib.util.find_spec(sys.argv[1]) else 1)";

impl PythonModuleResolver {
    pub fn new(interpreter: impl Into<String>) -> Self {
        Self {
            interpreter: interpreter.into(),
        }
    }
}

impl ModuleResolver for PythonModuleResolver {
    fn is_resolvable(&self, module: &str) -> bool {
        let status = Command::new(&self.interpreter)
            .args(["-c", FIND_SPEC, module])
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status();
        match status {
            Ok(status) => status.success(),
            Err(err) => {
                debug!("Cannot run {} to probe '{}': {}", self.interpreter, module, err);
                false
            }
        }
    }
}

/// Resolver with a fixed set of available modules.
#[derive(Debug, Clone, Default)]
pub struct StaticModuleResolver {
    available: HashSet<String>,
}

impl StaticModuleResolver {
    pub fn new<I, S>(modules: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            available: modules.into_iter().map(Into::into).collect(),
        }
    }
}

impl ModuleResolver for StaticModuleResolver {
    fn is_resolvable(&self, module: &str) -> bool {
        self.available.contains(module)
    }
}

/// Flags optional vendor modules that the project imports but the host
/// environment cannot resolve. Each module is reported at most once.
pub struct VendorDependencyRule;

impl VendorDependencyRule {
    fn is_imported(&self, ctx: &ReviewContext<'_>, module: &VendorModule) -> bool {
        let import = format!("import {}", module.name);
        let from = format!("from {}", module.name);
        ctx.sources.iter().any(|file| match file.content() {
            Ok(content) => content.contains(&import) || content.contains(&from),
            Err(err) => {
                debug!(rule = self.id(), file = %file.relative_path, "Skipping file: {}", err);
                false
            }
        })
    }
}

impl Rule for VendorDependencyRule {
    fn id(&self) -> &'static str {
        "vendor-dependency"
    }

    fn check(&self, ctx: &ReviewContext<'_>) -> Vec<Issue> {
        ctx.config
            .vendor_modules
            .iter()
            .filter(|module| self.is_imported(ctx, module))
            .filter(|module| !ctx.resolver.is_resolvable(&module.name))
            .map(|module| {
                Issue::new(
                    Severity::Critical,
                    Category::Architecture,
                    "setup/installation",
                    module.description.as_str(),
                )
                .with_recommendation(module.recommendation.as_str())
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_interpreter_means_unresolvable() {
        let resolver = PythonModuleResolver::new("/nonexistent/python3");
        assert!(!resolver.is_resolvable("json"));
    }

    #[test]
    fn static_resolver_knows_only_its_modules() {
        let resolver = StaticModuleResolver::new(["hailo"]);
        assert!(resolver.is_resolvable("hailo"));
        assert!(!resolver.is_resolvable("hailo_apps"));
    }
}
