use std::{ops::Deref, sync::Arc};

use crate::{
    error::{ErrorVerbosity, ErrorVerbosityProvider},
    upload::scheduler::UploadScheduler,
};

#[derive(Clone)]
pub struct ApiState {
    inner: Arc<ApiStateInner>,
}

impl ApiState {
    pub fn new(error_verbosity: ErrorVerbosity, uploads: UploadScheduler) -> Self {
        Self {
            inner: Arc::new(ApiStateInner {
                error_verbosity,
                uploads,
            }),
        }
    }
}

impl Deref for ApiState {
    type Target = ApiStateInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

pub struct ApiStateInner {
    error_verbosity: ErrorVerbosity,
    uploads: UploadScheduler,
}

impl ApiStateInner {
    /// Scheduler of the deferred upload invocations.
    pub fn uploads(&self) -> &UploadScheduler {
        &self.uploads
    }
}

impl ErrorVerbosityProvider for ApiState {
    fn error_verbosity(&self) -> ErrorVerbosity {
        self.error_verbosity
    }
}
