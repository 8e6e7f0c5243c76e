// src/events/handlers/mod.rs
//
// Default event handlers: structured log lines for every scan fact.
// Front-ends may subscribe their own handlers on top of these.

use log::{info, warn};

use crate::events::types::{
    CameraPermissionDenied, ScanAdmitted, ScanCompleted, ScanLookupFailed,
};
use crate::events::EventBus;

/// Subscribe log emitters for all scan events.
/// Call once at composition time, before any scan cycle runs.
pub fn register_logging_handlers(event_bus: &EventBus) {
    event_bus.subscribe::<ScanAdmitted, _>(|event| {
        info!(
            "scan admitted: value={} symbology={} intent={}",
            event.code_value, event.symbology, event.intent
        );
    });

    event_bus.subscribe::<ScanCompleted, _>(|event| {
        info!(
            "scan completed: value={} intent={} recognized={}",
            event.code_value, event.intent, event.recognized
        );
    });

    event_bus.subscribe::<ScanLookupFailed, _>(|event| {
        warn!(
            "scan lookup failed: value={} intent={} reason={}",
            event.code_value, event.intent, event.reason
        );
    });

    event_bus.subscribe::<CameraPermissionDenied, _>(|_| {
        warn!("camera permission denied");
    });
}
