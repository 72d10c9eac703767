//! Run configuration.
//!
//! This module resolves everything a run needs before the first step starts:
//! - Environment signals in [`environment`]
//! - Optional YAML step lists in [`steps_file`]
//! - [`RunSettings`], the merged view of flags and environment
//!
//! # Example
//!
//! ```
//! use steprun::config::RunSettings;
//! use std::env::VarError;
//!
//! let settings = RunSettings::from_env_with(".", |key| match key {
//!     "LINT" => Ok("false".to_string()),
//!     _ => Err(VarError::NotPresent),
//! });
//!
//! let run = settings.build_run().unwrap();
//! assert!(!run.names().contains(&"Lint"));
//! ```
//!
//! The CI host signal is deliberately not part of [`RunSettings`]; the
//! notifier probes it on every notification.

pub mod environment;
pub mod steps_file;

pub use environment::{is_ci_host, is_ci_host_with, lint_disabled_with};
pub use steps_file::{load_steps_file, parse_steps};

use std::env::VarError;
use std::path::PathBuf;

use crate::error::Result;
use crate::steps::{HostPlatform, LintFilter, RegistryContext, Run, StepRegistry};

/// Default location of the sibling build scripts, relative to the project root.
pub const DEFAULT_SCRIPTS_DIR: &str = "build_scripts";

/// Settings for one invocation.
#[derive(Debug, Clone)]
pub struct RunSettings {
    /// Working directory for every step.
    pub project_root: PathBuf,

    /// Directory holding the build scripts.
    pub scripts_dir: PathBuf,

    /// Platform the commands are rendered for.
    pub platform: HostPlatform,

    /// Whether the lint step is part of the run.
    pub lint_enabled: bool,

    /// YAML step list replacing the built-in registry.
    pub steps_file: Option<PathBuf>,

    /// Report every step without spawning anything.
    pub dry_run: bool,

    /// Capture step output instead of inheriting it.
    pub capture_output: bool,
}

impl RunSettings {
    /// Defaults for `project_root`, ignoring the environment.
    pub fn new(project_root: impl Into<PathBuf>) -> Self {
        Self {
            project_root: project_root.into(),
            scripts_dir: PathBuf::from(DEFAULT_SCRIPTS_DIR),
            platform: HostPlatform::current(),
            lint_enabled: true,
            steps_file: None,
            dry_run: false,
            capture_output: false,
        }
    }

    /// Defaults with environment signals applied.
    pub fn from_env(project_root: impl Into<PathBuf>) -> Self {
        Self::from_env_with(project_root, |key| std::env::var(key))
    }

    /// [`RunSettings::from_env`] with a custom env var lookup.
    pub fn from_env_with<F>(project_root: impl Into<PathBuf>, env_fn: F) -> Self
    where
        F: Fn(&str) -> std::result::Result<String, VarError>,
    {
        let mut settings = Self::new(project_root);
        if lint_disabled_with(env_fn) {
            tracing::debug!("Lint disabled via {}", environment::LINT_VAR);
            settings.lint_enabled = false;
        }
        settings
    }

    /// Inputs for the built-in registry.
    pub fn registry_context(&self) -> RegistryContext {
        RegistryContext {
            scripts_dir: self.scripts_dir.clone(),
            platform: self.platform,
        }
    }

    /// The full step list: the steps file if one is set, else the built-in steps.
    pub fn load_registry(&self) -> Result<StepRegistry> {
        match &self.steps_file {
            Some(path) => {
                tracing::debug!("Loading steps from {}", path.display());
                load_steps_file(path)
            }
            None => Ok(StepRegistry::canonical(&self.registry_context())),
        }
    }

    /// The filter applied to the registry.
    pub fn filter(&self) -> LintFilter {
        LintFilter::new(self.lint_enabled)
    }

    /// Load the registry and select this invocation's steps.
    pub fn build_run(&self) -> Result<Run> {
        let registry = self.load_registry()?;
        Ok(Run::from_registry(&registry, &self.filter()))
    }
}
