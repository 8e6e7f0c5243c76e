// src/error/types.rs
use crate::domain::DomainError;
use crate::registry::LookupError;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// Operator declined the camera permission prompt. Fatal to starting a
    /// scan session; surfaced once as a blocking state, never retried.
    #[error("Camera permission is required")]
    PermissionDenied,

    /// No usable camera device handle. Fatal to starting a scan session.
    #[error("Camera device not found")]
    DeviceUnavailable,

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Lookup error: {0}")]
    Lookup(#[from] LookupError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Other error: {0}")]
    Other(String),
}

impl Serialize for AppError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
