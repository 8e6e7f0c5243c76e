// src/events/types.rs
//
// All domain events in the system.
// Each event represents an immutable fact that has already occurred.
//
// CRITICAL RULES:
// - Events are facts, not commands
// - Events are immutable
// - Events carry only the data needed to react
// - No business logic in event types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Trait that all domain events must implement
pub trait DomainEvent: std::fmt::Debug + Clone {
    /// Unique identifier for this event instance
    fn event_id(&self) -> Uuid;

    /// When this event occurred
    fn occurred_at(&self) -> DateTime<Utc>;

    /// Human-readable event type name
    fn event_type(&self) -> &'static str;
}

// ============================================================================
// SCAN CYCLE EVENTS
// ============================================================================

/// Emitted when the gate admits a detection and a scan cycle begins
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanAdmitted {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub code_value: String,
    pub symbology: String,
    pub intent: String, // "qr_machine", "barcode_raw_material"
}

impl ScanAdmitted {
    pub fn new(code_value: String, symbology: String, intent: String) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            code_value,
            symbology,
            intent,
        }
    }
}

impl DomainEvent for ScanAdmitted {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "ScanAdmitted" }
}

/// Emitted when a scan cycle hands its result to presentation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanCompleted {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub code_value: String,
    pub intent: String,
    pub recognized: bool, // false = classifier fallback display
}

impl ScanCompleted {
    pub fn new(code_value: String, intent: String, recognized: bool) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            code_value,
            intent,
            recognized,
        }
    }
}

impl DomainEvent for ScanCompleted {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "ScanCompleted" }
}

/// Emitted when the registry lookup fails with a user-visible error
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanLookupFailed {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub code_value: String,
    pub intent: String,
    pub reason: String,
}

impl ScanLookupFailed {
    pub fn new(code_value: String, intent: String, reason: String) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            code_value,
            intent,
            reason,
        }
    }
}

impl DomainEvent for ScanLookupFailed {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "ScanLookupFailed" }
}

// ============================================================================
// CAMERA EVENTS
// ============================================================================

/// Emitted once when the camera permission prompt resolves to denied
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CameraPermissionDenied {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
}

impl CameraPermissionDenied {
    pub fn new() -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
        }
    }
}

impl Default for CameraPermissionDenied {
    fn default() -> Self {
        Self::new()
    }
}

impl DomainEvent for CameraPermissionDenied {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "CameraPermissionDenied" }
}
