mod cloudinary;
mod factory;
mod manager;
mod provider;
mod simulated;
mod types;

pub use cloudinary::CloudinaryUploader;
pub use factory::create_uploader;
pub use manager::UploadManager;
pub use provider::{ProgressReporter, Uploader};
pub use simulated::SimulatedUploader;
pub use types::{
    duration_label, mime_type_for_path, size_label, UploadRequest, UploadSlot, UploadStatus,
    UploadedAsset,
};
