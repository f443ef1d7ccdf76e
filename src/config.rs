/// An optional third-party module whose absence from the host environment is
/// reported as a setup problem.
#[derive(Debug, Clone)]
pub struct VendorModule {
    /// Top-level module name as written after `import` / `from`.
    pub name: String,
    /// Finding description when the module is imported but not resolvable.
    pub description: String,
    /// Remediation text for the finding.
    pub recommendation: String,
}

impl VendorModule {
    fn new(name: &str, description: &str, recommendation: &str) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            recommendation: recommendation.to_string(),
        }
    }
}

/// Tunable constants consulted by the discoverer and the rules.
///
/// `ReviewConfig::default()` reproduces the stock review battery. The CLI only
/// overrides `python_interpreter`; library users may adjust anything.
#[derive(Debug, Clone)]
pub struct ReviewConfig {
    /// Extensions (without the dot) of source files.
    pub source_extensions: Vec<String>,
    /// Extensions of configuration files.
    pub config_extensions: Vec<String>,
    /// Any path containing one of these directory names is skipped.
    pub excluded_dirs: Vec<String>,
    /// File names that look like configuration but are test fixtures.
    pub excluded_files: Vec<String>,

    /// Known misspelling of a project module.
    pub misspelled_module: String,
    /// The module name the misspelling stands for.
    pub correct_module: String,

    /// Named constants that belong in the project config file.
    pub tunable_constants: Vec<String>,
    /// Root-level project config file name.
    pub config_file_name: String,

    /// Path fragments that mark a module as owning shared on-disk state.
    pub shared_state_markers: Vec<String>,
    /// Mutual-exclusion primitives whose presence silences the shared-state rule.
    pub lock_markers: Vec<String>,

    pub tests_dir: String,
    pub test_file_prefix: String,
    pub test_file_suffix: String,
    pub readme_file: String,

    pub vendor_modules: Vec<VendorModule>,
    /// Interpreter used to probe module resolution.
    pub python_interpreter: String,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Default for ReviewConfig {
    fn default() -> Self {
        Self {
            source_extensions: strings(&["py"]),
            config_extensions: strings(&["yaml", "yml", "json"]),
            excluded_dirs: strings(&["__pycache__"]),
            excluded_files: strings(&["database.json"]),
            misspelled_module: "coffe_master".to_string(),
            correct_module: "coffee_master".to_string(),
            tunable_constants: strings(&["LOITER_THRESHOLD", "RESET_TIMEOUT"]),
            config_file_name: "config.yaml".to_string(),
            shared_state_markers: strings(&["database", "config"]),
            lock_markers: strings(&["threading.Lock", "multiprocessing.Lock"]),
            tests_dir: "tests".to_string(),
            test_file_prefix: "test_".to_string(),
            test_file_suffix: ".py".to_string(),
            readme_file: "README.md".to_string(),
            vendor_modules: vec![
                VendorModule::new(
                    "hailo",
                    "Hailo library is imported but not available. This indicates a setup or installation issue.",
                    "Install Hailo libraries: pip install hailort or follow Hailo installation guide",
                ),
                VendorModule::new(
                    "hailo_apps",
                    "hailo_apps package is imported but not available. This indicates a setup or installation issue.",
                    "Install hailo_apps package or ensure PYTHONPATH is set correctly",
                ),
            ],
            python_interpreter: "python3".to_string(),
        }
    }
}
