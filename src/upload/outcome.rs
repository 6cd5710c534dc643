use super::invoker::{InvocationOutput, InvocationStatus, InvokeError};

/// How a finished upload invocation is reported.
#[derive(Debug)]
pub enum UploadOutcome {
    /// The script exited successfully and wrote nothing to stderr.
    Succeeded { stdout: String },
    /// The script exited successfully but wrote to stderr. Stdout is not reported.
    StandardError { stderr: String },
    /// The script exited with a failure status.
    Exited {
        status: InvocationStatus,
        stderr: String,
    },
    /// The script could not be run at all.
    NotStarted(InvokeError),
}

impl UploadOutcome {
    pub fn classify(result: Result<InvocationOutput, InvokeError>) -> Self {
        match result {
            Err(err) => UploadOutcome::NotStarted(err),
            Ok(output) if !output.status.success() => UploadOutcome::Exited {
                status: output.status,
                stderr: output.stderr,
            },
            Ok(output) if !output.stderr.is_empty() => UploadOutcome::StandardError {
                stderr: output.stderr,
            },
            Ok(output) => UploadOutcome::Succeeded {
                stdout: output.stdout,
            },
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, UploadOutcome::Succeeded { .. })
    }

    pub fn log(&self) {
        match self {
            UploadOutcome::Succeeded { stdout } => {
                tracing::info!(stdout = %stdout.trim_end(), "Upload script finished");
            }
            UploadOutcome::StandardError { stderr } => {
                tracing::error!(stderr = %stderr.trim_end(), "Upload script reported errors");
            }
            UploadOutcome::Exited { status, stderr } => {
                tracing::error!(%status, stderr = %stderr.trim_end(), "Upload script failed");
            }
            UploadOutcome::NotStarted(err) => {
                tracing::error!(%err, "Upload script could not be run");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output(success: bool, code: i32, stdout: &str, stderr: &str) -> InvocationOutput {
        InvocationOutput {
            status: InvocationStatus::new(success, Some(code)),
            stdout: stdout.to_string(),
            stderr: stderr.to_string(),
        }
    }

    #[test]
    fn clean_exit_reports_stdout() {
        let outcome = UploadOutcome::classify(Ok(output(true, 0, "Video URL added\n", "")));

        assert!(outcome.is_success());
        assert!(matches!(
            outcome,
            UploadOutcome::Succeeded { stdout } if stdout == "Video URL added\n"
        ));
    }

    #[test]
    fn stderr_short_circuits_stdout() {
        let outcome =
            UploadOutcome::classify(Ok(output(true, 0, "Video URL added\n", "DeprecationWarning")));

        assert!(!outcome.is_success());
        assert!(matches!(
            outcome,
            UploadOutcome::StandardError { stderr } if stderr == "DeprecationWarning"
        ));
    }

    #[test]
    fn failed_exit_wins_over_stderr() {
        let outcome = UploadOutcome::classify(Ok(output(false, 1, "", "Traceback")));

        assert!(matches!(
            outcome,
            UploadOutcome::Exited { status, ref stderr } if status.code() == Some(1) && stderr == "Traceback"
        ));
    }

    #[test]
    fn spawn_error_is_not_started() {
        let err = InvokeError::new(
            "python3",
            std::io::Error::new(std::io::ErrorKind::NotFound, "No such file or directory"),
        );

        let outcome = UploadOutcome::classify(Err(err));

        assert!(matches!(outcome, UploadOutcome::NotStarted(_)));
    }
}
