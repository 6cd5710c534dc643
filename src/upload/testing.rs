use std::sync::{Arc, Mutex};

use axum::async_trait;
use tokio::time::Instant;

use super::invoker::{InvocationOutput, InvocationStatus, InvokeError, ProcessInvoker};

#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub args: Vec<String>,
    pub at: Instant,
}

/// Records every invocation instead of running a process.
#[derive(Debug, Default)]
pub struct RecordingInvoker {
    calls: Arc<Mutex<Vec<RecordedCall>>>,
    fail: bool,
}

impl RecordingInvoker {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().expect("Poisoned").clone()
    }
}

#[async_trait]
impl ProcessInvoker for RecordingInvoker {
    async fn invoke(&self, args: &[String]) -> Result<InvocationOutput, InvokeError> {
        self.calls.lock().expect("Poisoned").push(RecordedCall {
            args: args.to_vec(),
            at: Instant::now(),
        });

        if self.fail {
            return Err(InvokeError::new(
                "python3",
                std::io::Error::new(std::io::ErrorKind::NotFound, "No such file or directory"),
            ));
        }

        Ok(InvocationOutput {
            status: InvocationStatus::new(true, Some(0)),
            stdout: format!("uploaded {}\n", args.join(" ")),
            stderr: String::new(),
        })
    }
}
