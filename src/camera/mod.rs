// src/camera/mod.rs
//
// Camera collaborator seam.
//
// The pipeline does not manage device selection or frame rendering; it only
// needs a permission-request capability and a device-availability check.
// Code detections arrive through ScanSession::handle_detections as the
// camera layer's callback.

use async_trait::async_trait;

use crate::error::AppResult;

/// Capability surface the camera layer must provide to the scan gate.
#[async_trait]
pub trait CameraAccess: Send + Sync {
    /// Ask the platform for camera permission. Resolves to granted/denied;
    /// an `Err` means the prompt itself could not be shown.
    async fn request_permission(&self) -> AppResult<bool>;

    /// Whether a usable camera device handle currently exists.
    fn device_available(&self) -> bool;
}
