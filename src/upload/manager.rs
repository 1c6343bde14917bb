use super::{ProgressReporter, UploadRequest, UploadSlot, UploadStatus, UploadedAsset, Uploader};
use crate::error::{Result, StudioError};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

struct SlotEntry {
    status: Arc<watch::Sender<UploadStatus>>,
    asset: Option<UploadedAsset>,
    in_flight: Option<CancellationToken>,
}

impl SlotEntry {
    fn new() -> Self {
        let (status, _) = watch::channel(UploadStatus::Idle);
        SlotEntry {
            status: Arc::new(status),
            asset: None,
            in_flight: None,
        }
    }

    /// Status to fall back to when an in-flight upload goes away
    fn settled_status(&self) -> UploadStatus {
        match &self.asset {
            Some(asset) => UploadStatus::Complete {
                asset: asset.clone(),
            },
            None => UploadStatus::Idle,
        }
    }
}

type Slots = Arc<Mutex<HashMap<UploadSlot, SlotEntry>>>;

/// Runs at most one upload per slot as a background task.
///
/// A new upload for a slot that is still in flight is rejected. Cancelling
/// or failing never touches the slot's committed asset.
#[derive(Clone)]
pub struct UploadManager {
    uploader: Arc<dyn Uploader>,
    slots: Slots,
}

fn lock(slots: &Slots) -> MutexGuard<'_, HashMap<UploadSlot, SlotEntry>> {
    slots.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl UploadManager {
    pub fn new(uploader: Arc<dyn Uploader>) -> Self {
        let slots: HashMap<_, _> = UploadSlot::ALL
            .into_iter()
            .map(|slot| (slot, SlotEntry::new()))
            .collect();
        UploadManager {
            uploader,
            slots: Arc::new(Mutex::new(slots)),
        }
    }

    /// Validates the file type and spawns the upload. Must be called from
    /// within a tokio runtime.
    pub fn start(&self, request: UploadRequest) -> Result<watch::Receiver<UploadStatus>> {
        let slot = request.slot;
        if !slot.accepts(&request.mime_type) {
            return Err(StudioError::InvalidFileType {
                slot: slot.to_string(),
                expected: format!("{}*", slot.accepted_mime_prefix()),
                actual: request.mime_type,
            });
        }

        let token = CancellationToken::new();
        let (status, receiver) = {
            let mut slots = lock(&self.slots);
            let entry = slots.entry(slot).or_insert_with(SlotEntry::new);
            if entry.in_flight.is_some() {
                return Err(StudioError::UploadInProgress(slot.to_string()));
            }
            entry.in_flight = Some(token.clone());
            entry
                .status
                .send_replace(UploadStatus::InProgress { progress: 0 });
            (entry.status.clone(), entry.status.subscribe())
        };

        info!(
            "Starting {} upload of {} ({} bytes)",
            slot,
            request.file_name,
            request.size()
        );

        let uploader = self.uploader.clone();
        let slots = self.slots.clone();
        tokio::spawn(async move {
            let reporter = ProgressReporter::new(status, token.clone());
            let result = tokio::select! {
                _ = token.cancelled() => return,
                result = uploader.upload(&request, &reporter) => result,
            };
            finish(&slots, slot, &token, result);
        });

        Ok(receiver)
    }

    /// Cancels the in-flight upload for `slot`. Returns false when nothing
    /// was running.
    pub fn cancel(&self, slot: UploadSlot) -> bool {
        let mut slots = lock(&self.slots);
        let Some(entry) = slots.get_mut(&slot) else {
            return false;
        };
        let Some(token) = entry.in_flight.take() else {
            return false;
        };
        token.cancel();
        entry.status.send_replace(entry.settled_status());
        info!("Cancelled {} upload", slot);
        true
    }

    /// Cancels anything in flight and clears the committed asset.
    pub fn remove(&self, slot: UploadSlot) -> Option<UploadedAsset> {
        let mut slots = lock(&self.slots);
        let entry = slots.get_mut(&slot)?;
        if let Some(token) = entry.in_flight.take() {
            token.cancel();
        }
        entry.status.send_replace(UploadStatus::Idle);
        entry.asset.take()
    }

    pub fn status(&self, slot: UploadSlot) -> UploadStatus {
        lock(&self.slots)
            .get(&slot)
            .map(|entry| entry.status.borrow().clone())
            .unwrap_or(UploadStatus::Idle)
    }

    pub fn asset(&self, slot: UploadSlot) -> Option<UploadedAsset> {
        lock(&self.slots)
            .get(&slot)
            .and_then(|entry| entry.asset.clone())
    }

    pub fn subscribe(&self, slot: UploadSlot) -> watch::Receiver<UploadStatus> {
        let mut slots = lock(&self.slots);
        slots
            .entry(slot)
            .or_insert_with(SlotEntry::new)
            .status
            .subscribe()
    }
}

fn finish(
    slots: &Slots,
    slot: UploadSlot,
    token: &CancellationToken,
    result: Result<UploadedAsset>,
) {
    let mut slots = lock(slots);
    // Cancellation may have won the race after the upload returned.
    if token.is_cancelled() {
        return;
    }
    let Some(entry) = slots.get_mut(&slot) else {
        return;
    };
    entry.in_flight = None;
    match result {
        Ok(asset) => {
            info!("{} upload complete: {}", slot, asset.url);
            entry.asset = Some(asset.clone());
            entry.status.send_replace(UploadStatus::Complete { asset });
        }
        Err(e) => {
            warn!("{} upload failed: {}", slot, e);
            entry.status.send_replace(UploadStatus::Failed {
                reason: e.to_string(),
            });
        }
    }
}
