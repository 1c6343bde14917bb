use super::{duration_label, size_label, ProgressReporter, UploadRequest, UploadedAsset, Uploader};
use crate::error::{Result, StudioError};
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::info;

/// The subset of the media service's upload response the studio keeps
#[derive(Debug, Deserialize)]
struct UploadResponse {
    secure_url: String,
    #[serde(default)]
    bytes: Option<u64>,
    #[serde(default)]
    duration: Option<f64>,
    #[serde(default)]
    original_filename: Option<String>,
    #[serde(default)]
    format: Option<String>,
}

/// Unsigned multipart upload to a Cloudinary-style endpoint
pub struct CloudinaryUploader {
    client: Client,
    upload_url: String,
    upload_preset: Option<String>,
}

impl CloudinaryUploader {
    pub fn new(upload_url: String, upload_preset: Option<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| StudioError::Internal(format!("Failed to create HTTP client: {}", e)))?;

        Ok(CloudinaryUploader {
            client,
            upload_url,
            upload_preset,
        })
    }
}

#[async_trait]
impl Uploader for CloudinaryUploader {
    async fn upload(
        &self,
        request: &UploadRequest,
        progress: &ProgressReporter,
    ) -> Result<UploadedAsset> {
        progress.report(0);

        let part = Part::bytes(request.data.clone())
            .file_name(request.file_name.clone())
            .mime_str(&request.mime_type)
            .map_err(|e| StudioError::Upload(format!("Invalid MIME type: {}", e)))?;
        let mut form = Form::new().part("file", part);
        if let Some(preset) = &self.upload_preset {
            form = form.text("upload_preset", preset.clone());
        }

        let response = self
            .client
            .post(&self.upload_url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| StudioError::Upload(format!("Failed to send upload: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(StudioError::Upload(format!(
                "Upload rejected ({}): {}",
                status, error_text
            )));
        }

        let body: UploadResponse = response
            .json()
            .await
            .map_err(|e| StudioError::Upload(format!("Failed to parse upload response: {}", e)))?;
        progress.report(100);
        info!("Uploaded {} to {}", request.file_name, body.secure_url);

        Ok(into_asset(request, body))
    }
}

fn into_asset(request: &UploadRequest, body: UploadResponse) -> UploadedAsset {
    let bytes = body.bytes.unwrap_or_else(|| request.size());
    let file_name = match (body.original_filename, body.format) {
        (Some(name), Some(format)) => format!("{}.{}", name, format),
        _ => request.file_name.clone(),
    };
    UploadedAsset {
        slot: request.slot,
        url: body.secure_url,
        file_name,
        mime_type: request.mime_type.clone(),
        bytes,
        size_label: size_label(bytes),
        duration: body.duration.map(duration_label),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::upload::UploadSlot;

    #[test]
    fn test_response_maps_to_asset() {
        let request = UploadRequest {
            slot: UploadSlot::PromoVideo,
            file_name: "promo.mp4".to_string(),
            mime_type: "video/mp4".to_string(),
            data: vec![0; 16],
        };
        let body: UploadResponse = serde_json::from_str(
            r#"{"secure_url":"https://cdn.example/v1/promo.mp4","bytes":2097152,
                "duration":95.2,"original_filename":"promo","format":"mp4",
                "resource_type":"video","public_id":"abc"}"#,
        )
        .unwrap();

        let asset = into_asset(&request, body);
        assert_eq!(asset.url, "https://cdn.example/v1/promo.mp4");
        assert_eq!(asset.size_label, "2.00 MB");
        assert_eq!(asset.duration.as_deref(), Some("1:35"));
        assert_eq!(asset.file_name, "promo.mp4");
    }
}
