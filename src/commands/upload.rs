use super::StudioState;
use crate::error::{Result, StudioError};
use crate::models::CourseDetails;
use crate::upload::{mime_type_for_path, UploadRequest, UploadSlot, UploadStatus, UploadedAsset};
use std::path::PathBuf;
use tracing::debug;

fn parse_slot(slot: &str) -> Result<UploadSlot> {
    slot.parse().map_err(StudioError::InvalidArgument)
}

/// Detail field that mirrors a slot's committed asset
fn slot_field(details: &mut CourseDetails, slot: UploadSlot) -> &mut String {
    match slot {
        UploadSlot::CourseImage => &mut details.thumbnail,
        UploadSlot::PromoVideo => &mut details.promo_video,
    }
}

/// Reads a local file and starts uploading it into `slot`
///
/// When this upload completes, its URL is written into the matching course
/// detail field (`thumbnail` or `promo_video`). A cancelled or failed upload
/// leaves the field alone.
pub async fn start_upload(state: &StudioState, slot: String, file_path: String) -> Result<UploadStatus> {
    let slot = parse_slot(&slot)?;
    let path = PathBuf::from(&file_path);
    let mime_type = mime_type_for_path(&path);
    if !slot.accepts(mime_type) {
        return Err(StudioError::InvalidFileType {
            slot: slot.to_string(),
            expected: format!("{}*", slot.accepted_mime_prefix()),
            actual: mime_type.to_string(),
        });
    }

    let data = tokio::fs::read(&path).await?;
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("upload")
        .to_string();

    let previous_url = state.uploads().asset(slot).map(|asset| asset.url);
    let mut receiver = state.uploads().start(UploadRequest {
        slot,
        file_name,
        mime_type: mime_type.to_string(),
        data,
    })?;
    let initial = receiver.borrow().clone();

    let draft_state = state.clone();
    tokio::spawn(async move {
        let settled = match receiver.wait_for(|s| !s.is_in_progress()).await {
            Ok(status) => status.clone(),
            Err(_) => return,
        };
        // A cancelled upload settles back on the previous asset.
        if let UploadStatus::Complete { asset } = settled {
            if previous_url.as_deref() == Some(asset.url.as_str()) {
                return;
            }
            debug!("Recording {} asset {}", slot, asset.url);
            let mut draft = draft_state.draft();
            *slot_field(&mut draft.details, slot) = asset.url;
        }
    });

    Ok(initial)
}

pub async fn cancel_upload(state: &StudioState, slot: String) -> Result<bool> {
    let slot = parse_slot(&slot)?;
    Ok(state.uploads().cancel(slot))
}

/// Drops the slot's asset and clears the matching detail field
pub async fn remove_upload(state: &StudioState, slot: String) -> Result<Option<UploadedAsset>> {
    let slot = parse_slot(&slot)?;
    let removed = state.uploads().remove(slot);
    slot_field(&mut state.draft().details, slot).clear();
    Ok(removed)
}

pub async fn upload_status(state: &StudioState, slot: String) -> Result<UploadStatus> {
    let slot = parse_slot(&slot)?;
    Ok(state.uploads().status(slot))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::state::test_state;
    use crate::commands::update_details;
    use crate::models::CourseDetailsPatch;
    use crate::upload::{ProgressReporter, Uploader};
    use async_trait::async_trait;
    use std::sync::Arc;
    use std::time::Duration;

    /// Finishes at once unless the file name marks it slow.
    struct GatedUploader;

    #[async_trait]
    impl Uploader for GatedUploader {
        async fn upload(
            &self,
            request: &UploadRequest,
            _progress: &ProgressReporter,
        ) -> Result<UploadedAsset> {
            if request.file_name.contains("slow") {
                tokio::time::sleep(Duration::from_secs(60)).await;
            }
            Ok(UploadedAsset {
                slot: request.slot,
                url: format!("https://cdn.test/{}", request.file_name),
                file_name: request.file_name.clone(),
                mime_type: request.mime_type.clone(),
                bytes: request.size(),
                size_label: crate::upload::size_label(request.size()),
                duration: None,
            })
        }
    }

    async fn wait_for_thumbnail(state: &StudioState) -> String {
        for _ in 0..50 {
            let thumbnail = state.draft().details.thumbnail.clone();
            if !thumbnail.is_empty() {
                return thumbnail;
            }
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
        String::new()
    }

    fn temp_file(name: &str, bytes: &[u8]) -> String {
        let path = std::env::temp_dir().join(format!("{}-{}", uuid::Uuid::new_v4(), name));
        std::fs::write(&path, bytes).unwrap();
        path.to_string_lossy().into_owned()
    }

    #[tokio::test]
    async fn test_completed_upload_fills_thumbnail() {
        let state = test_state();
        let path = temp_file("cover.png", &[0x89, 0x50, 0x4e, 0x47]);
        let status = start_upload(&state, "course-image".to_string(), path.clone())
            .await
            .unwrap();
        assert!(status.is_in_progress());

        let mut rx = state.uploads().subscribe(UploadSlot::CourseImage);
        rx.wait_for(|s| s.is_finished()).await.unwrap();
        // Give the recording task a moment to take the draft lock.
        for _ in 0..50 {
            if !state.draft().details.thumbnail.is_empty() {
                break;
            }
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
        assert!(state.draft().details.thumbnail.starts_with("local://uploads/"));

        remove_upload(&state, "course-image".to_string()).await.unwrap();
        assert!(state.draft().details.thumbnail.is_empty());
        std::fs::remove_file(path).ok();
    }

    #[tokio::test]
    async fn test_cancelled_upload_keeps_edited_field() {
        let state = StudioState::with_uploader("English", Arc::new(GatedUploader));
        let fast = temp_file("cover.png", &[1, 2, 3]);
        start_upload(&state, "course-image".to_string(), fast.clone())
            .await
            .unwrap();
        assert!(wait_for_thumbnail(&state).await.ends_with("cover.png"));

        let slow = temp_file("slow.png", &[4, 5, 6]);
        start_upload(&state, "course-image".to_string(), slow.clone())
            .await
            .unwrap();
        update_details(&state, CourseDetailsPatch {
            thumbnail: Some("https://images.test/hand-picked.png".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();
        assert!(cancel_upload(&state, "course-image".to_string()).await.unwrap());

        tokio::time::sleep(Duration::from_millis(50)).await;
        assert_eq!(
            state.draft().details.thumbnail,
            "https://images.test/hand-picked.png"
        );
        assert!(matches!(
            upload_status(&state, "course-image".to_string()).await.unwrap(),
            UploadStatus::Complete { .. }
        ));
        std::fs::remove_file(fast).ok();
        std::fs::remove_file(slow).ok();
    }

    #[tokio::test]
    async fn test_wrong_type_is_reported() {
        let state = test_state();
        let result = start_upload(&state, "promo-video".to_string(), "/tmp/cover.png".to_string()).await;
        assert!(matches!(result, Err(StudioError::InvalidFileType { .. })));
        assert_eq!(
            upload_status(&state, "promo-video".to_string()).await.unwrap(),
            UploadStatus::Idle
        );
    }

    #[tokio::test]
    async fn test_unknown_slot() {
        let state = test_state();
        assert!(matches!(
            cancel_upload(&state, "banner".to_string()).await,
            Err(StudioError::InvalidArgument(_))
        ));
    }
}
