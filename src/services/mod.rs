// src/services/mod.rs
//
// Services Module - Orchestration Layer

pub mod classifier;
pub mod scan_gate;
pub mod scan_session;
pub mod share;


// Re-export all services and their types
pub use classifier::PayloadClassifier;

pub use scan_gate::{ProcessingGuard, ScanGate};

pub use scan_session::{CycleOutcome, ScanSession};

pub use share::ShareService;
