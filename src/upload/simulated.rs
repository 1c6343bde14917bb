use super::{size_label, ProgressReporter, UploadRequest, UploadedAsset, Uploader};
use crate::error::Result;
use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;
use uuid::Uuid;

/// Local stand-in for a media service: advances progress on a timer and
/// hands back a `local://` URL.
pub struct SimulatedUploader {
    tick: Duration,
    step_percent: u8,
}

impl SimulatedUploader {
    pub fn new(tick: Duration, step_percent: u8) -> Self {
        SimulatedUploader {
            tick,
            step_percent: step_percent.clamp(1, 100),
        }
    }
}

#[async_trait]
impl Uploader for SimulatedUploader {
    async fn upload(
        &self,
        request: &UploadRequest,
        progress: &ProgressReporter,
    ) -> Result<UploadedAsset> {
        let mut percent = 0u8;
        while percent < 100 {
            tokio::time::sleep(self.tick).await;
            percent = percent.saturating_add(self.step_percent).min(100);
            progress.report(percent);
        }
        debug!("Simulated upload of {} finished", request.file_name);

        Ok(UploadedAsset {
            slot: request.slot,
            url: format!("local://uploads/{}/{}", Uuid::new_v4(), request.file_name),
            file_name: request.file_name.clone(),
            mime_type: request.mime_type.clone(),
            bytes: request.size(),
            size_label: size_label(request.size()),
            duration: None,
        })
    }
}
