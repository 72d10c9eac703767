//! Step definitions and run selection.
//!
//! - [`Step`] - A named command, immutable once built
//! - [`StepRegistry`] - The ordered list of every known step
//! - [`Run`] - The steps selected for one invocation
//! - [`StepFilter`] - Per-step include/exclude decision used to build a run
//!
//! # Example
//!
//! ```
//! use steprun::steps::{LintFilter, RegistryContext, Run, StepRegistry};
//!
//! let registry = StepRegistry::canonical(&RegistryContext::default());
//! let run = Run::from_registry(&registry, &LintFilter::new(false));
//!
//! assert_eq!(run.len(), registry.len() - 1);
//! assert_eq!(run.names()[0], "Build");
//! ```

pub mod registry;
pub mod selection;
pub mod step;

pub use registry::{
    HostPlatform, RegistryContext, StepRegistry, BUILD_STEP, EXTENSIONS_TEST_STEP, LINT_STEP,
    TEST_STEP, TYPE_CHECK_STEP,
};
pub use selection::{IncludeAll, LintFilter, Run, Selection, StepFilter};
pub use step::{Step, StepStatus};
