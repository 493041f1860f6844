use sbar_core::{Result, SbarError};
use std::process::Command;

/// Captured result of one external-process invocation.
///
/// A non-zero exit is *not* an error at this layer — sketchybar reports many
/// recoverable conditions that way and the caller decides whether to escalate.
#[derive(Debug, Clone, Default)]
pub struct Outcome {
    pub stdout: String,
    pub stderr: String,
    /// Exit code; `None` when the process was killed by a signal.
    pub code: Option<i32>,
}

impl Outcome {
    #[must_use]
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

impl From<std::process::Output> for Outcome {
    fn from(output: std::process::Output) -> Self {
        Self {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            code: output.status.code(),
        }
    }
}

/// Seam between command construction and process execution.
///
/// The library runs everything through this trait so tests can substitute a
/// recording implementation and assert on the exact token sequences issued.
pub trait Invoker {
    /// Execute a token sequence directly (`tokens[0]` is the program).
    fn invoke(&self, tokens: &[String]) -> Result<Outcome>;

    /// Execute one pre-formatted command line through `/bin/sh -c`.
    ///
    /// Only used for multi-flag invocations (the animate command) that are
    /// easier to express as a single string.
    fn shell(&self, line: &str) -> Result<Outcome>;
}

/// The real invoker: synchronous, blocking `std::process` execution.
#[derive(Debug, Clone, Copy, Default)]
pub struct Runner;

impl Invoker for Runner {
    fn invoke(&self, tokens: &[String]) -> Result<Outcome> {
        let (program, args) = tokens
            .split_first()
            .ok_or_else(|| SbarError::Invoke("empty command".into()))?;

        let output = Command::new(program)
            .args(args)
            .output()
            .map_err(|e| SbarError::Invoke(format!("cannot run '{program}': {e}")))?;

        Ok(output.into())
    }

    fn shell(&self, line: &str) -> Result<Outcome> {
        let output = Command::new("/bin/sh")
            .arg("-c")
            .arg(line)
            .output()
            .map_err(|e| SbarError::Invoke(format!("cannot run shell: {e}")))?;

        Ok(output.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nonzero_exit_is_not_an_error() {
        let outcome = Runner
            .shell("echo oops >&2; exit 3")
            .expect("shell must spawn");
        assert!(!outcome.success());
        assert_eq!(outcome.code, Some(3));
        assert_eq!(outcome.stderr, "oops\n");
    }

    #[test]
    fn stdout_is_captured_as_text() {
        let tokens = vec!["echo".to_string(), "hello".to_string()];
        let outcome = Runner.invoke(&tokens).expect("echo must spawn");
        assert!(outcome.success());
        assert_eq!(outcome.stdout, "hello\n");
    }

    #[test]
    fn missing_binary_is_an_invoke_error() {
        let tokens = vec!["definitely-not-a-real-binary-xyz".to_string()];
        let err = Runner.invoke(&tokens).unwrap_err();
        assert!(matches!(err, SbarError::Invoke(_)));
    }
}
