use crate::config::Config;
use crate::error::Result;
use crate::upload::{create_uploader, UploadManager, Uploader};
use crate::wizard::CourseDraft;
use std::sync::{Arc, Mutex, MutexGuard};

/// Shared state behind every command: the draft being authored and the
/// landing page uploads.
#[derive(Clone)]
pub struct StudioState {
    draft: Arc<Mutex<CourseDraft>>,
    uploads: UploadManager,
}

impl StudioState {
    pub fn new(config: &Config) -> Result<Self> {
        let uploader = create_uploader(config)?;
        Ok(Self::with_uploader(&config.default_language, uploader))
    }

    pub fn with_uploader(default_language: &str, uploader: Arc<dyn Uploader>) -> Self {
        StudioState {
            draft: Arc::new(Mutex::new(CourseDraft::new(default_language))),
            uploads: UploadManager::new(uploader),
        }
    }

    pub(crate) fn draft(&self) -> MutexGuard<'_, CourseDraft> {
        self.draft
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub(crate) fn uploads(&self) -> &UploadManager {
        &self.uploads
    }
}

#[cfg(test)]
pub(crate) fn test_state() -> StudioState {
    use crate::upload::SimulatedUploader;
    use std::time::Duration;

    StudioState::with_uploader(
        "English",
        Arc::new(SimulatedUploader::new(Duration::from_millis(1), 50)),
    )
}
