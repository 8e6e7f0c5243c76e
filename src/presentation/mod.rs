// src/presentation/mod.rs
//
// Presentation collaborator seam.
//
// The orchestrator's only outbound interface: hand a finished ScanResult to
// a detail view, or surface a transient error message. Rendering and
// navigation wiring live entirely outside this crate.

use log::{info, warn};

use crate::domain::ScanResult;

pub trait ScanPresenter: Send + Sync {
    /// Hand off a completed scan to the detail view. The presenter owns the
    /// result from this point on, read-only.
    fn navigate_to_details(&self, result: ScanResult);

    /// Show a transient, user-visible error. No navigation occurs.
    fn show_error(&self, message: &str);
}

/// Default presenter for headless composition: logs the hand-off instead of
/// navigating. Real front-ends supply their own implementation.
pub struct LoggingPresenter;

impl ScanPresenter for LoggingPresenter {
    fn navigate_to_details(&self, result: ScanResult) {
        info!(
            "scan resolved: value={} symbology={} intent={} recognized={}",
            result.raw_code.value,
            result.raw_code.symbology,
            result.intent,
            result.details.is_recognized()
        );
    }

    fn show_error(&self, message: &str) {
        warn!("scan failed: {message}");
    }
}
