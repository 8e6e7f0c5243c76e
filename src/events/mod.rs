// src/events/mod.rs
//
// Internal Event System - Public API
//
// CRITICAL: EventHandler is INTERNAL and must NOT be exported

pub mod bus;
pub mod handlers;
pub mod types;

pub use types::DomainEvent;

pub use types::{CameraPermissionDenied, ScanAdmitted, ScanCompleted, ScanLookupFailed};

pub use bus::{EventBus, EventLogEntry};

pub use handlers::register_logging_handlers;

/// Create an event bus ready for subscription
pub fn create_event_bus() -> EventBus {
    EventBus::new()
}
