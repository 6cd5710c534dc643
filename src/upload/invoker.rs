use std::{
    fmt,
    path::{Path, PathBuf},
    process::{ExitStatus, Stdio},
};

use axum::async_trait;
use tokio::process::Command;

/// Runs an external program and captures what it wrote.
#[async_trait]
pub trait ProcessInvoker: Send + Sync {
    async fn invoke(&self, args: &[String]) -> Result<InvocationOutput, InvokeError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationOutput {
    pub status: InvocationStatus,
    pub stdout: String,
    pub stderr: String,
}

/// Exit status of a finished invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvocationStatus {
    success: bool,
    code: Option<i32>,
}

impl InvocationStatus {
    pub fn new(success: bool, code: Option<i32>) -> Self {
        Self { success, code }
    }

    pub fn success(&self) -> bool {
        self.success
    }

    /// `None` if the process was terminated by a signal.
    pub fn code(&self) -> Option<i32> {
        self.code
    }
}

impl From<ExitStatus> for InvocationStatus {
    fn from(status: ExitStatus) -> Self {
        Self::new(status.success(), status.code())
    }
}

impl fmt::Display for InvocationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "exit code {code}"),
            None => f.write_str("termination by signal"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
#[error("Failed to run `{program}`: {source}")]
pub struct InvokeError {
    program: String,
    #[source]
    source: std::io::Error,
}

impl InvokeError {
    pub fn new(program: impl Into<String>, source: std::io::Error) -> Self {
        Self {
            program: program.into(),
            source,
        }
    }
}

/// Invokes `<interpreter> <script> <args...>` with no stdin and captured output.
#[derive(Debug, Clone)]
pub struct ScriptInvoker {
    interpreter: String,
    script: PathBuf,
}

impl ScriptInvoker {
    pub fn new(interpreter: impl Into<String>, script: impl Into<PathBuf>) -> Self {
        Self {
            interpreter: interpreter.into(),
            script: script.into(),
        }
    }

    pub fn interpreter(&self) -> &str {
        &self.interpreter
    }

    pub fn script(&self) -> &Path {
        &self.script
    }
}

#[async_trait]
impl ProcessInvoker for ScriptInvoker {
    #[tracing::instrument(
        name = "script_invoker",
        skip_all,
        fields(interpreter = %self.interpreter, script = %self.script.display())
    )]
    async fn invoke(&self, args: &[String]) -> Result<InvocationOutput, InvokeError> {
        tracing::debug!(?args, "Invoking");

        let output = Command::new(&self.interpreter)
            .arg(&self.script)
            .args(args)
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|err| InvokeError::new(self.interpreter.clone(), err))?;

        let output = InvocationOutput {
            status: output.status.into(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        };

        tracing::debug!(status = %output.status, "Finished");

        Ok(output)
    }
}
