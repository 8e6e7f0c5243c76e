// src/lib.rs
// ScanHub - factory-floor code scanning companion
//
// Architecture:
// - Domain-centric: scan value objects and backend records live in domain/
// - Event-driven: services emit scan facts through a synchronous bus
// - Explicit: collaborators (camera, presentation) are trait seams supplied
//   at composition time; no ambient state
// - Single-flight: one scan cycle in flight per gate, enforced by an
//   atomic slot with an RAII guard

// ============================================================================
// FOUNDATION
// ============================================================================

pub mod camera;
pub mod domain;
pub mod error;
pub mod events;
pub mod presentation;
pub mod registry;
pub mod services;

// ============================================================================
// APPLICATION LAYER
// ============================================================================

pub mod application;

// ============================================================================
// PUBLIC API - Domain
// ============================================================================

pub use domain::{
    validate_raw_code,
    ClassifiedPayload,
    Detection,
    // Machine registry records
    MachineDetails,
    Mould,
    // Raw material registry records
    RawCode,
    RawMaterial,
    RawMaterialLot,
    ScanDetails,
    // Scan value objects
    ScanIntent,
    ScanResult,
};

// ============================================================================
// PUBLIC API - Error Types
// ============================================================================

pub use error::{AppError, AppResult};

// ============================================================================
// PUBLIC API - Events
// ============================================================================

pub use events::{
    create_event_bus,
    register_logging_handlers,
    CameraPermissionDenied,
    DomainEvent,
    EventBus,
    EventLogEntry,
    ScanAdmitted,
    ScanCompleted,
    ScanLookupFailed,
};

// ============================================================================
// PUBLIC API - Collaborator Seams
// ============================================================================

pub use camera::CameraAccess;
pub use presentation::{LoggingPresenter, ScanPresenter};

// ============================================================================
// PUBLIC API - Registry
// ============================================================================

pub use registry::{
    Credentials, DetailResolver, HttpDetailResolver, LookupError, RegistryConfig,
    ResolvedDetails,
};

// ============================================================================
// PUBLIC API - Services
// ============================================================================

pub use services::{
    CycleOutcome,
    // Payload Classifier
    PayloadClassifier,
    ProcessingGuard,
    // Scan Gate
    ScanGate,
    // Scan Session
    ScanSession,
    // Share Service
    ShareService,
};

// ============================================================================
// PUBLIC API - Application Layer
// ============================================================================

pub use application::AppState;
