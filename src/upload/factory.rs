use super::{CloudinaryUploader, SimulatedUploader, Uploader};
use crate::config::{Config, UploadProvider};
use crate::error::{Result, StudioError};
use std::sync::Arc;
use std::time::Duration;

pub fn create_uploader(config: &Config) -> Result<Arc<dyn Uploader>> {
    match config.upload_provider {
        UploadProvider::Simulated => Ok(Arc::new(SimulatedUploader::new(
            Duration::from_millis(config.upload_tick_ms),
            config.upload_step_percent,
        ))),
        UploadProvider::Cloudinary => {
            let upload_url = config.upload_url.as_ref().ok_or_else(|| {
                StudioError::Config("Cloudinary upload URL is not configured".to_string())
            })?;

            let uploader = CloudinaryUploader::new(
                upload_url.clone(),
                config.upload_preset.clone(),
                Duration::from_secs(config.upload_timeout_secs),
            )?;
            Ok(Arc::new(uploader))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cloudinary_requires_url() {
        let config = Config {
            upload_provider: UploadProvider::Cloudinary,
            ..Default::default()
        };
        assert!(matches!(create_uploader(&config), Err(StudioError::Config(_))));
    }

    #[test]
    fn test_simulated_is_default() {
        assert!(create_uploader(&Config::default()).is_ok());
    }
}
