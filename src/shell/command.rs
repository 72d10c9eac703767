//! Blocking process invocation.
//!
//! Commands are token lists, not shell strings: the first token is the
//! executable and the rest are passed through as arguments untouched.

use crate::error::{Result, SteprunError};
use std::io::ErrorKind;
use std::path::PathBuf;
use std::process::{Command, ExitStatus, Stdio};
use std::time::{Duration, Instant};

use super::quote::join;

/// Result of executing a command.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit code. Termination by signal is reported as the negated signal number.
    pub exit_code: i32,

    /// Captured stdout followed by stderr (empty when output was inherited).
    pub output: String,

    /// Execution duration.
    pub duration: Duration,
}

impl CommandResult {
    /// Whether the command exited with code 0.
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Options for command execution.
#[derive(Debug, Clone, Default)]
pub struct CommandOptions {
    /// Working directory.
    pub cwd: Option<PathBuf>,

    /// Capture stdout/stderr (if false, both are inherited from the parent).
    pub capture: bool,
}

/// Run `command` to completion and report its exit code.
///
/// A non-zero exit is a normal result. Only failures to start or wait on the
/// process are returned as errors.
pub fn run_cmd(command: &[String], options: &CommandOptions) -> Result<CommandResult> {
    let (program, args) = command
        .split_first()
        .ok_or_else(|| SteprunError::SpawnFailed {
            command: String::new(),
            message: "no executable given".to_string(),
        })?;

    let start = Instant::now();

    let mut cmd = Command::new(program);
    cmd.args(args);

    if let Some(cwd) = &options.cwd {
        cmd.current_dir(cwd);
    }

    let spawn_error = |e: std::io::Error| {
        if e.kind() == ErrorKind::NotFound {
            SteprunError::CommandNotFound {
                program: program.clone(),
            }
        } else {
            SteprunError::SpawnFailed {
                command: join(command),
                message: e.to_string(),
            }
        }
    };

    let (status, output) = if options.capture {
        let output = cmd
            .stdin(Stdio::inherit())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .map_err(spawn_error)?;
        let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
        text.push_str(&String::from_utf8_lossy(&output.stderr));
        (output.status, text)
    } else {
        let status = cmd
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(spawn_error)?;
        (status, String::new())
    };

    Ok(CommandResult {
        exit_code: exit_code(status),
        output,
        duration: start.elapsed(),
    })
}

fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return -signal;
        }
    }

    -1
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn empty_command_is_rejected() {
        let err = run_cmd(&[], &CommandOptions::default()).unwrap_err();
        assert!(matches!(err, SteprunError::SpawnFailed { .. }));
    }

    #[test]
    fn missing_executable_is_command_not_found() {
        let err = run_cmd(
            &tokens(&["steprun-definitely-not-a-real-binary"]),
            &CommandOptions::default(),
        )
        .unwrap_err();

        match err {
            SteprunError::CommandNotFound { program } => {
                assert_eq!(program, "steprun-definitely-not-a-real-binary")
            }
            other => panic!("Expected CommandNotFound, got {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn non_zero_exit_is_not_an_error() {
        let options = CommandOptions {
            capture: true,
            ..Default::default()
        };
        let result = run_cmd(&tokens(&["sh", "-c", "exit 3"]), &options).unwrap();

        assert!(!result.success());
        assert_eq!(result.exit_code, 3);
    }

    #[cfg(unix)]
    #[test]
    fn capture_collects_stdout_then_stderr() {
        let options = CommandOptions {
            capture: true,
            ..Default::default()
        };
        let result = run_cmd(
            &tokens(&["sh", "-c", "echo out; echo err >&2"]),
            &options,
        )
        .unwrap();

        assert!(result.success());
        assert_eq!(result.output, "out\nerr\n");
    }

    #[cfg(unix)]
    #[test]
    fn inherited_output_is_not_captured() {
        let result = run_cmd(&tokens(&["sh", "-c", "true"]), &CommandOptions::default()).unwrap();
        assert!(result.success());
        assert!(result.output.is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn arguments_are_passed_verbatim() {
        let options = CommandOptions {
            capture: true,
            ..Default::default()
        };
        let result = run_cmd(
            &tokens(&["printf", "%s|", "a b", "$HOME", "'q'"]),
            &options,
        )
        .unwrap();

        assert_eq!(result.output, "a b|$HOME|'q'|");
    }

    #[cfg(unix)]
    #[test]
    fn runs_in_working_directory() {
        let temp = tempfile::TempDir::new().unwrap();
        std::fs::write(temp.path().join("marker.txt"), "").unwrap();

        let options = CommandOptions {
            cwd: Some(temp.path().to_path_buf()),
            capture: true,
            ..Default::default()
        };
        let result = run_cmd(&tokens(&["ls"]), &options).unwrap();

        assert!(result.output.contains("marker.txt"));
    }

    #[cfg(unix)]
    #[test]
    fn signal_termination_is_negative() {
        let options = CommandOptions {
            capture: true,
            ..Default::default()
        };
        let result = run_cmd(&tokens(&["sh", "-c", "kill -9 $$"]), &options).unwrap();

        assert_eq!(result.exit_code, -9);
    }
}
