use super::{UploadRequest, UploadStatus, UploadedAsset};
use crate::error::Result;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;

/// Publishes progress for one in-flight upload.
///
/// Reports arriving after cancellation are dropped, so a cancelled upload
/// can never flip its slot back to in-progress.
pub struct ProgressReporter {
    status: Arc<watch::Sender<UploadStatus>>,
    token: CancellationToken,
}

impl ProgressReporter {
    pub(crate) fn new(status: Arc<watch::Sender<UploadStatus>>, token: CancellationToken) -> Self {
        Self { status, token }
    }

    pub fn report(&self, progress: u8) {
        let progress = progress.min(100);
        self.status.send_if_modified(|status| {
            if self.token.is_cancelled() {
                return false;
            }
            *status = UploadStatus::InProgress { progress };
            true
        });
    }
}

#[async_trait]
pub trait Uploader: Send + Sync {
    async fn upload(&self, request: &UploadRequest, progress: &ProgressReporter)
        -> Result<UploadedAsset>;
}
