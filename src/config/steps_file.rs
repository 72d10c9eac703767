//! Loading a step list from YAML.
//!
//! ```yaml
//! steps:
//!   - name: Lint
//!     command: [cargo, clippy]
//!   - name: Test
//!     command: [cargo, test]
//! ```

use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::error::{Result, SteprunError};
use crate::steps::{Step, StepRegistry};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct StepsFile {
    steps: Vec<Step>,
}

/// Load and validate a steps file.
///
/// # Errors
///
/// Returns `StepsFileNotFound` if the file doesn't exist,
/// `StepsFileParse` if the YAML is invalid, and `InvalidSteps`
/// if the list is empty or a step has no name or command.
pub fn load_steps_file(path: &Path) -> Result<StepRegistry> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            SteprunError::StepsFileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            SteprunError::Io(e)
        }
    })?;

    parse_steps(&content, path)
}

/// Parse YAML content into a registry.
///
/// # Arguments
///
/// * `content` - The YAML content to parse
/// * `source_path` - Path for error reporting
pub fn parse_steps(content: &str, source_path: &Path) -> Result<StepRegistry> {
    let file: StepsFile =
        serde_yaml::from_str(content).map_err(|e| SteprunError::StepsFileParse {
            path: source_path.to_path_buf(),
            message: e.to_string(),
        })?;

    validate(&file.steps)?;
    Ok(StepRegistry::from_steps(file.steps))
}

fn validate(steps: &[Step]) -> Result<()> {
    if steps.is_empty() {
        return Err(SteprunError::InvalidSteps {
            message: "no steps defined".to_string(),
        });
    }

    let mut seen = HashSet::new();
    for (index, step) in steps.iter().enumerate() {
        if step.name().trim().is_empty() {
            return Err(SteprunError::InvalidSteps {
                message: format!("step {} has an empty name", index + 1),
            });
        }
        if step.command().is_empty() {
            return Err(SteprunError::InvalidSteps {
                message: format!("step '{}' has an empty command", step.name()),
            });
        }
        if !seen.insert(step.name()) {
            tracing::warn!("Step name '{}' appears more than once", step.name());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn parse(content: &str) -> Result<StepRegistry> {
        parse_steps(content, Path::new("steps.yml"))
    }

    #[test]
    fn parses_steps_in_file_order() {
        let registry = parse(
            r#"
steps:
  - name: Test
    command: [cargo, test]
  - name: Lint
    command: [cargo, clippy, --, -D, warnings]
"#,
        )
        .unwrap();

        let names: Vec<_> = registry.steps().iter().map(Step::name).collect();
        assert_eq!(names, vec!["Test", "Lint"]);
        assert_eq!(
            registry.get("Lint").unwrap().command(),
            ["cargo", "clippy", "--", "-D", "warnings"]
        );
    }

    #[test]
    fn empty_list_is_invalid() {
        let err = parse("steps: []").unwrap_err();
        assert!(matches!(err, SteprunError::InvalidSteps { .. }));
    }

    #[test]
    fn empty_command_is_invalid() {
        let err = parse("steps:\n  - name: Build\n    command: []\n").unwrap_err();
        match err {
            SteprunError::InvalidSteps { message } => assert!(message.contains("'Build'")),
            other => panic!("Expected InvalidSteps, got {other:?}"),
        }
    }

    #[test]
    fn blank_name_is_invalid() {
        let err = parse("steps:\n  - name: ' '\n    command: [make]\n").unwrap_err();
        assert!(matches!(err, SteprunError::InvalidSteps { .. }));
    }

    #[test]
    fn duplicate_names_are_allowed() {
        let registry = parse(
            "steps:\n  - name: A\n    command: [x]\n  - name: A\n    command: [y]\n",
        )
        .unwrap();
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let err = parse("steps: []\nparallel: true\n").unwrap_err();
        assert!(matches!(err, SteprunError::StepsFileParse { .. }));
    }

    #[test]
    fn unknown_step_fields_are_rejected() {
        let err = parse("steps:\n  - name: Build\n    command: [make]\n    timout: 5\n")
            .unwrap_err();
        match err {
            SteprunError::StepsFileParse { message, .. } => assert!(message.contains("timout")),
            other => panic!("Expected StepsFileParse, got {other:?}"),
        }
    }

    #[test]
    fn invalid_yaml_reports_path() {
        let err = parse("steps: [unterminated").unwrap_err();
        assert!(err.to_string().contains("steps.yml"));
    }

    #[test]
    fn load_missing_file() {
        let temp = TempDir::new().unwrap();
        let err = load_steps_file(&temp.path().join("nope.yml")).unwrap_err();
        assert!(matches!(err, SteprunError::StepsFileNotFound { .. }));
    }

    #[test]
    fn load_from_disk() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("steps.yml");
        fs::write(&path, "steps:\n  - name: Build\n    command: [make]\n").unwrap();

        let registry = load_steps_file(&path).unwrap();
        assert_eq!(registry.steps(), [Step::new("Build", ["make"])]);
    }
}
