//! The canonical build step list.

use std::path::PathBuf;

use super::step::Step;

/// Name of the lint step, the only step that can be switched off.
pub const LINT_STEP: &str = "Lint";
/// Name of the build step.
pub const BUILD_STEP: &str = "Build";
/// Name of the unit test step.
pub const TEST_STEP: &str = "Run Tests";
/// Name of the extensions test step.
pub const EXTENSIONS_TEST_STEP: &str = "Run Extensions Tests";
/// Name of the type check step.
pub const TYPE_CHECK_STEP: &str = "Type Check";

/// Paths handed to the linter.
pub const LINT_TARGETS: &[&str] = &[
    "build_scripts/",
    "pytype/",
    "pytype_extensions/",
    "setup.py",
];

/// Host platform, as far as step commands care.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostPlatform {
    Windows,
    Unix,
}

impl HostPlatform {
    /// The platform this binary is running on.
    pub fn current() -> Self {
        if cfg!(windows) {
            HostPlatform::Windows
        } else {
            HostPlatform::Unix
        }
    }

    /// Path separator used in rendered command tokens.
    pub fn separator(&self) -> char {
        match self {
            HostPlatform::Windows => '\\',
            HostPlatform::Unix => '/',
        }
    }

    /// Join path components with this platform's separator.
    pub fn join_path(&self, parts: &[&str]) -> String {
        parts.join(&self.separator().to_string())
    }
}

/// Inputs the canonical registry depends on.
#[derive(Debug, Clone)]
pub struct RegistryContext {
    /// Directory holding the sibling build scripts.
    pub scripts_dir: PathBuf,

    /// Platform the commands will run on.
    pub platform: HostPlatform,
}

impl Default for RegistryContext {
    fn default() -> Self {
        Self {
            scripts_dir: PathBuf::from("build_scripts"),
            platform: HostPlatform::current(),
        }
    }
}

impl RegistryContext {
    /// Path to a script living next to the build scripts.
    pub fn build_script(&self, name: &str) -> String {
        self.scripts_dir.join(name).to_string_lossy().into_owned()
    }

    /// Command prefix plus checker path for the type check step.
    ///
    /// On Windows the checker is a Python script without a launcher, so it
    /// has to go through the interpreter.
    fn type_checker(&self) -> Vec<String> {
        let checker = self.platform.join_path(&["out", "bin", "pytype"]);
        match self.platform {
            HostPlatform::Windows => vec!["python".to_string(), checker],
            HostPlatform::Unix => vec![checker],
        }
    }
}

/// An ordered, immutable list of steps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepRegistry {
    steps: Vec<Step>,
}

impl StepRegistry {
    /// Build the standard five-step list.
    pub fn canonical(ctx: &RegistryContext) -> Self {
        let lint = Step::new(
            LINT_STEP,
            std::iter::once("pylint").chain(LINT_TARGETS.iter().copied()),
        );

        let build = Step::new(
            BUILD_STEP,
            ["python".to_string(), ctx.build_script("build.py")],
        );

        let tests = Step::new(
            TEST_STEP,
            [
                "python".to_string(),
                ctx.build_script("run_tests.py"),
                "-v".to_string(),
            ],
        );

        let extensions_tests = Step::new(
            EXTENSIONS_TEST_STEP,
            ["python", "-m", "pytype_extensions.test_pytype_extensions"],
        );

        let mut type_check = ctx.type_checker();
        type_check.extend(["-j".to_string(), "auto".to_string()]);
        let type_check = Step::new(TYPE_CHECK_STEP, type_check);

        Self {
            steps: vec![lint, build, tests, extensions_tests, type_check],
        }
    }

    /// Wrap an already ordered list of steps.
    pub fn from_steps(steps: Vec<Step>) -> Self {
        Self { steps }
    }

    /// Steps in declared order.
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Find a step by name.
    pub fn get(&self, name: &str) -> Option<&Step> {
        self.steps.iter().find(|s| s.name() == name)
    }

    /// Number of steps.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether the registry has no steps.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unix_ctx() -> RegistryContext {
        RegistryContext {
            scripts_dir: PathBuf::from("build_scripts"),
            platform: HostPlatform::Unix,
        }
    }

    fn names(registry: &StepRegistry) -> Vec<&str> {
        registry.steps().iter().map(Step::name).collect()
    }

    #[test]
    fn canonical_order() {
        let registry = StepRegistry::canonical(&unix_ctx());
        assert_eq!(
            names(&registry),
            vec![
                LINT_STEP,
                BUILD_STEP,
                TEST_STEP,
                EXTENSIONS_TEST_STEP,
                TYPE_CHECK_STEP
            ]
        );
    }

    #[test]
    fn lint_runs_pylint_over_sources() {
        let registry = StepRegistry::canonical(&unix_ctx());
        let lint = registry.get(LINT_STEP).unwrap();
        assert_eq!(
            lint.command_line(),
            "pylint build_scripts/ pytype/ pytype_extensions/ setup.py"
        );
    }

    #[test]
    fn build_and_tests_use_sibling_scripts() {
        let registry = StepRegistry::canonical(&unix_ctx());
        assert_eq!(
            registry.get(BUILD_STEP).unwrap().command(),
            ["python", "build_scripts/build.py"]
        );
        assert_eq!(
            registry.get(TEST_STEP).unwrap().command(),
            ["python", "build_scripts/run_tests.py", "-v"]
        );
    }

    #[test]
    fn scripts_dir_is_configurable() {
        let ctx = RegistryContext {
            scripts_dir: PathBuf::from("/repo/ci"),
            platform: HostPlatform::Unix,
        };
        assert_eq!(ctx.build_script("build.py"), "/repo/ci/build.py");
    }

    #[test]
    fn extensions_tests_run_module() {
        let registry = StepRegistry::canonical(&unix_ctx());
        assert_eq!(
            registry.get(EXTENSIONS_TEST_STEP).unwrap().command_line(),
            "python -m pytype_extensions.test_pytype_extensions"
        );
    }

    #[test]
    fn type_check_runs_checker_directly_on_unix() {
        let registry = StepRegistry::canonical(&unix_ctx());
        assert_eq!(
            registry.get(TYPE_CHECK_STEP).unwrap().command(),
            ["out/bin/pytype", "-j", "auto"]
        );
    }

    #[test]
    fn type_check_goes_through_interpreter_on_windows() {
        let ctx = RegistryContext {
            platform: HostPlatform::Windows,
            ..unix_ctx()
        };
        let registry = StepRegistry::canonical(&ctx);
        let type_check = registry.get(TYPE_CHECK_STEP).unwrap();

        assert_eq!(type_check.name(), TYPE_CHECK_STEP);
        assert_eq!(
            type_check.command(),
            ["python", "out\\bin\\pytype", "-j", "auto"]
        );
    }

    #[test]
    fn platform_changes_command_not_step_list() {
        let windows = RegistryContext {
            platform: HostPlatform::Windows,
            ..unix_ctx()
        };
        assert_eq!(
            names(&StepRegistry::canonical(&windows)),
            names(&StepRegistry::canonical(&unix_ctx()))
        );
    }

    #[test]
    fn join_path_uses_platform_separator() {
        assert_eq!(HostPlatform::Unix.join_path(&["a", "b"]), "a/b");
        assert_eq!(HostPlatform::Windows.join_path(&["a", "b"]), "a\\b");
    }

    #[test]
    fn from_steps_keeps_order() {
        let registry = StepRegistry::from_steps(vec![
            Step::new("b", ["true"]),
            Step::new("a", ["true"]),
        ]);
        assert_eq!(names(&registry), vec!["b", "a"]);
        assert_eq!(registry.len(), 2);
        assert!(!registry.is_empty());
        assert!(registry.get("c").is_none());
    }
}
