//! Subprocess execution

use std::path::PathBuf;
use std::process::Command;

use crate::error::{BomError, Result};

/// One invocation of an executable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Execution {
    pub args: Vec<String>,
    /// Working directory for the process
    pub dir: PathBuf,
}

/// What a finished process reported.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExecOutput {
    /// Exit code, or -1 when terminated by a signal
    pub code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl ExecOutput {
    pub fn success(&self) -> bool {
        self.code == 0
    }

    /// stdout followed by stderr, as one would see them in a terminal.
    pub fn combined(&self) -> String {
        format!("{}{}", self.stdout, self.stderr)
    }
}

/// A program that can be run with arguments.
///
/// Spawning failures are errors; a non-zero exit is reported through
/// [`ExecOutput::code`] and left to the caller.
pub trait Executable: Send + Sync {
    fn name(&self) -> &str;
    fn execute(&self, execution: &Execution) -> Result<ExecOutput>;
}

impl<T: Executable + ?Sized> Executable for &T {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn execute(&self, execution: &Execution) -> Result<ExecOutput> {
        (**self).execute(execution)
    }
}

/// Runs a program found on `PATH` (or at an explicit path).
#[derive(Debug, Clone)]
pub struct CommandExecutable {
    program: String,
}

impl CommandExecutable {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Executable for CommandExecutable {
    fn name(&self) -> &str {
        &self.program
    }

    fn execute(&self, execution: &Execution) -> Result<ExecOutput> {
        let output = Command::new(&self.program)
            .current_dir(&execution.dir)
            .args(&execution.args)
            .output()
            .map_err(|e| BomError::Io {
                action: "run",
                path: PathBuf::from(&self.program),
                source: e,
            })?;

        Ok(ExecOutput {
            code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}
