// src/services/scan_gate.rs
//
// Scan Gate - admission control for camera detections
//
// CRITICAL RULES:
// - Owns exactly two flags: permission and the single in-flight slot
// - Camera callbacks may fire faster than a lookup resolves; while a cycle
//   is in flight every new detection is rejected, never queued
// - The in-flight slot must be released on every exit path, including
//   panics, so the gate never wedges in a permanently busy state
//
// State machine: Idle(no permission) -> Idle(ready) <-> Busy.
// No terminal state; the gate lives as long as the scanning UI does.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use log::debug;

use crate::camera::CameraAccess;
use crate::domain::Detection;
use crate::error::{AppError, AppResult};
use crate::events::{CameraPermissionDenied, EventBus};

/// RAII hold on the single in-flight processing slot.
/// Dropping the guard releases the slot unconditionally.
pub struct ProcessingGuard {
    slot: Arc<AtomicBool>,
}

impl Drop for ProcessingGuard {
    fn drop(&mut self) {
        self.slot.store(false, Ordering::Release);
    }
}

pub struct ScanGate {
    camera: Arc<dyn CameraAccess>,
    event_bus: Arc<EventBus>,
    has_permission: AtomicBool,
    is_processing: Arc<AtomicBool>,
}

impl ScanGate {
    pub fn new(camera: Arc<dyn CameraAccess>, event_bus: Arc<EventBus>) -> Self {
        Self {
            camera,
            event_bus,
            has_permission: AtomicBool::new(false),
            is_processing: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Ask the camera collaborator for permission once. A denial is
    /// reported as a blocking error; there is no automatic retry loop.
    pub async fn request_permission(&self) -> AppResult<()> {
        let granted = self.camera.request_permission().await?;
        self.has_permission.store(granted, Ordering::Release);

        if granted {
            Ok(())
        } else {
            self.event_bus.emit(CameraPermissionDenied::new());
            Err(AppError::PermissionDenied)
        }
    }

    pub fn has_permission(&self) -> bool {
        self.has_permission.load(Ordering::Acquire)
    }

    pub fn is_processing(&self) -> bool {
        self.is_processing.load(Ordering::Acquire)
    }

    /// Decide whether a detection becomes pipeline work.
    /// Rejection is silent steady-state behavior during continuous
    /// scanning, not an error.
    pub fn admit(&self, detection: &Detection) -> bool {
        if self.is_processing() {
            debug!("detection dropped: previous scan cycle still in flight");
            return false;
        }

        if !self.has_permission() {
            debug!("detection dropped: camera permission not granted");
            return false;
        }

        if !self.camera.device_available() {
            debug!("detection dropped: camera device unavailable");
            return false;
        }

        if detection.value.is_empty() {
            debug!("detection dropped: empty code value");
            return false;
        }

        true
    }

    /// Blocking precondition for opening a scanning view: a usable camera
    /// device handle must exist.
    pub fn ensure_device(&self) -> AppResult<()> {
        if self.camera.device_available() {
            Ok(())
        } else {
            Err(AppError::DeviceUnavailable)
        }
    }

    /// Claim the single in-flight slot. Returns None when another cycle
    /// already holds it (the authoritative duplicate-submission check).
    pub fn begin_processing(&self) -> Option<ProcessingGuard> {
        self.is_processing
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| ProcessingGuard {
                slot: Arc::clone(&self.is_processing),
            })
    }
}
