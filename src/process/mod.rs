//! External command execution
//!
//! Every generator, package manager and docker call goes through [`Shell`].
//! Commands always receive an explicit working directory; the process-wide
//! current directory is never changed.

use std::future::Future;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::process::Command;

use crate::core::{ScaffoldError, ScaffoldResult};

/// A fully described external command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: PathBuf,
    pub env: Vec<(String, String)>,
}

impl CommandSpec {
    pub fn new(program: impl Into<String>, cwd: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            cwd: cwd.into(),
            env: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.push((key.into(), value.into()));
        self
    }

    /// Command line as typed in a shell, for logs and errors
    pub fn display(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Runs external commands to completion
pub trait Shell {
    /// Run with inherited stdio so the tool's own progress is visible
    fn run(&self, spec: &CommandSpec) -> impl Future<Output = ScaffoldResult<()>> + Send;

    /// Run and return trimmed stdout
    fn capture(&self, spec: &CommandSpec) -> impl Future<Output = ScaffoldResult<String>> + Send;
}

/// [`Shell`] backed by real child processes
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemShell;

impl SystemShell {
    fn command(spec: &CommandSpec) -> Command {
        let mut command = Command::new(&spec.program);
        command
            .args(&spec.args)
            .current_dir(&spec.cwd)
            .envs(spec.env.iter().map(|(k, v)| (k, v)));
        command
    }
}

impl Shell for SystemShell {
    async fn run(&self, spec: &CommandSpec) -> ScaffoldResult<()> {
        tracing::debug!("running `{}` in {}", spec.display(), spec.cwd.display());

        let status = Self::command(spec)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .await
            .map_err(|source| ScaffoldError::CommandSpawn {
                command: spec.display(),
                source,
            })?;

        if !status.success() {
            return Err(ScaffoldError::CommandFailed {
                command: spec.display(),
                status: status
                    .code()
                    .map(|c| c.to_string())
                    .unwrap_or_else(|| "signal".to_string()),
            });
        }

        Ok(())
    }

    async fn capture(&self, spec: &CommandSpec) -> ScaffoldResult<String> {
        tracing::debug!("capturing `{}` in {}", spec.display(), spec.cwd.display());

        let output = Self::command(spec)
            .stdin(Stdio::null())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|source| ScaffoldError::CommandSpawn {
                command: spec.display(),
                source,
            })?;

        if !output.status.success() {
            tracing::debug!(
                "`{}` failed: {}",
                spec.display(),
                String::from_utf8_lossy(&output.stderr).trim()
            );
            return Err(ScaffoldError::CommandFailed {
                command: spec.display(),
                status: output
                    .status
                    .code()
                    .map(|c| c.to_string())
                    .unwrap_or_else(|| "signal".to_string()),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

/// JAVA_HOME of the `java` executable found on PATH
pub fn java_home() -> Option<PathBuf> {
    let java = which::which("java").ok()?;
    let java = std::fs::canonicalize(&java).unwrap_or(java);
    java_home_from_binary(&java)
}

/// `<home>/bin/java` → `<home>`
fn java_home_from_binary(java: &Path) -> Option<PathBuf> {
    java.parent()?.parent().map(Path::to_path_buf)
}
