// src/domain/mod.rs
//
// Domain Root - The Single Source of Truth for Domain API
//
// This file MUST declare all domain modules and re-export their public API.
// All other modules import from `crate::domain::*`

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

pub mod machine;
pub mod raw_material;
pub mod scan;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

// Scan Domain
pub use scan::{
    validate_raw_code, ClassifiedPayload, Detection, RawCode, ScanDetails, ScanIntent,
    ScanResult,
};

// Machine Registry Records
pub use machine::{MachineDetails, Mould};

// Raw Material Registry Records
pub use raw_material::{RawMaterial, RawMaterialLot};

// ============================================================================
// DOMAIN ERROR TYPES
// ============================================================================

use thiserror::Error;

/// Domain-level errors
/// These represent violations of business rules and invariants
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),
}

/// Domain result type
pub type DomainResult<T> = Result<T, DomainError>;
