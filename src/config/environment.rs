//! Environment signals.
//!
//! Every check has a `_with` variant taking a lookup function so tests can
//! supply a fake environment instead of mutating the process one.

use std::env::VarError;

/// Set (non-empty) when running under GitHub Actions.
pub const CI_HOST_VAR: &str = "GITHUB_ACTIONS";

/// Set to `false` to drop the lint step.
pub const LINT_VAR: &str = "LINT";

/// Whether the process is running on a recognized CI host.
pub fn is_ci_host() -> bool {
    is_ci_host_with(|key| std::env::var(key))
}

/// [`is_ci_host`] with a custom env var lookup.
pub fn is_ci_host_with<F>(env_fn: F) -> bool
where
    F: Fn(&str) -> Result<String, VarError>,
{
    matches!(env_fn(CI_HOST_VAR), Ok(value) if !value.is_empty())
}

/// Whether linting has been switched off through `env_fn`.
///
/// Only the exact value `false` disables linting.
pub fn lint_disabled_with<F>(env_fn: F) -> bool
where
    F: Fn(&str) -> Result<String, VarError>,
{
    env_fn(LINT_VAR).as_deref() == Ok("false")
}
