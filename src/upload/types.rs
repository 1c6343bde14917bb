use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Landing page media slots that accept an upload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UploadSlot {
    CourseImage,
    PromoVideo,
}

impl UploadSlot {
    pub const ALL: [UploadSlot; 2] = [UploadSlot::CourseImage, UploadSlot::PromoVideo];

    pub fn as_str(self) -> &'static str {
        match self {
            UploadSlot::CourseImage => "course-image",
            UploadSlot::PromoVideo => "promo-video",
        }
    }

    /// MIME prefix this slot accepts, e.g. `image/`
    pub fn accepted_mime_prefix(self) -> &'static str {
        match self {
            UploadSlot::CourseImage => "image/",
            UploadSlot::PromoVideo => "video/",
        }
    }

    pub fn accepts(self, mime_type: &str) -> bool {
        mime_type.starts_with(self.accepted_mime_prefix())
    }
}

impl fmt::Display for UploadSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UploadSlot {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        UploadSlot::ALL
            .into_iter()
            .find(|slot| slot.as_str() == s)
            .ok_or_else(|| format!("Unknown upload slot: {}", s))
    }
}

/// A file picked by the user for one slot
#[derive(Debug, Clone)]
pub struct UploadRequest {
    pub slot: UploadSlot,
    pub file_name: String,
    pub mime_type: String,
    pub data: Vec<u8>,
}

impl UploadRequest {
    pub fn size(&self) -> u64 {
        self.data.len() as u64
    }
}

/// A committed upload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadedAsset {
    pub slot: UploadSlot,
    pub url: String,
    pub file_name: String,
    pub mime_type: String,
    pub bytes: u64,
    pub size_label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
}

/// Lifecycle of one slot's upload
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "kebab-case")]
pub enum UploadStatus {
    Idle,
    InProgress { progress: u8 },
    Complete { asset: UploadedAsset },
    Failed { reason: String },
}

impl UploadStatus {
    pub fn is_in_progress(&self) -> bool {
        matches!(self, UploadStatus::InProgress { .. })
    }

    pub fn is_finished(&self) -> bool {
        matches!(self, UploadStatus::Complete { .. } | UploadStatus::Failed { .. })
    }
}

/// Size label in megabytes with two decimals, e.g. `12.50 MB`
pub fn size_label(bytes: u64) -> String {
    format!("{:.2} MB", bytes as f64 / (1024.0 * 1024.0))
}

/// Formats seconds as `m:ss`, or `h:mm:ss` past an hour
pub fn duration_label(seconds: f64) -> String {
    let total = seconds.max(0.0).round() as u64;
    let (hours, minutes, secs) = (total / 3600, (total % 3600) / 60, total % 60);
    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, secs)
    } else {
        format!("{}:{:02}", minutes, secs)
    }
}

/// Guesses a MIME type from a file extension. Unknown extensions map to
/// `application/octet-stream`, which no slot accepts.
pub fn mime_type_for_path(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();
    match extension.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "mp4" => "video/mp4",
        "mov" => "video/quicktime",
        "webm" => "video/webm",
        "mkv" => "video/x-matroska",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_accepts_matching_mime() {
        assert!(UploadSlot::CourseImage.accepts("image/png"));
        assert!(!UploadSlot::CourseImage.accepts("video/mp4"));
        assert!(UploadSlot::PromoVideo.accepts("video/mp4"));
        assert!(!UploadSlot::PromoVideo.accepts("application/pdf"));
    }

    #[test]
    fn test_labels() {
        assert_eq!(size_label(5 * 1024 * 1024 + 512 * 1024), "5.50 MB");
        assert_eq!(duration_label(272.0), "4:32");
        assert_eq!(duration_label(3725.4), "1:02:05");
    }

    #[test]
    fn test_mime_from_extension() {
        assert_eq!(mime_type_for_path(Path::new("cover.JPG")), "image/jpeg");
        assert_eq!(mime_type_for_path(Path::new("promo.mp4")), "video/mp4");
        assert_eq!(mime_type_for_path(Path::new("notes")), "application/octet-stream");
    }

    #[test]
    fn test_status_serializes_state_tag() {
        let value = serde_json::to_value(UploadStatus::InProgress { progress: 40 }).unwrap();
        assert_eq!(value["state"], "in-progress");
        assert_eq!(value["progress"], 40);
    }
}
