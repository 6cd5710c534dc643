use std::{sync::Arc, time::Duration};

use tokio_util::task::TaskTracker;
use tracing::Instrument;

use super::{invoker::ProcessInvoker, outcome::UploadOutcome};

/// Schedules upload invocations to run after a fixed delay.
///
/// Every job is spawned on a [`TaskTracker`] so that shutdown can wait for
/// pending and running jobs with [`UploadScheduler::drain`]. Jobs are never
/// cancelled, retried or serialized per user.
#[derive(Clone)]
pub struct UploadScheduler {
    invoker: Arc<dyn ProcessInvoker>,
    delay: Duration,
    tracker: TaskTracker,
}

impl UploadScheduler {
    pub fn new(invoker: Arc<dyn ProcessInvoker>, delay: Duration) -> Self {
        Self {
            invoker,
            delay,
            tracker: TaskTracker::new(),
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Number of jobs that are waiting or running.
    pub fn pending(&self) -> usize {
        self.tracker.len()
    }

    /// Schedules one invocation with `user_id` as its only argument and returns immediately.
    pub fn schedule(&self, user_id: String) {
        let invoker = self.invoker.clone();
        let delay = self.delay;
        let span = tracing::info_span!("upload", %user_id);

        self.tracker.spawn(
            async move {
                tracing::debug!(?delay, "Pending");

                tokio::time::sleep(delay).await;

                tracing::debug!("Running");

                let result = invoker.invoke(&[user_id]).await;
                UploadOutcome::classify(result).log();
            }
            .instrument(span),
        );
    }

    /// Waits until every scheduled job has finished.
    pub async fn drain(&self) {
        self.tracker.close();

        let pending = self.tracker.len();
        if pending > 0 {
            tracing::info!(pending, "Waiting for scheduled uploads");
        }

        self.tracker.wait().await;

        tracing::debug!("Scheduled uploads drained");
    }
}
