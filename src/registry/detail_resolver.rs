// src/registry/detail_resolver.rs
//
// Backend registry lookup - trait seam plus HTTP implementation
//
// CRITICAL RULES:
// - The only component in the pipeline that performs network I/O
// - Failures are always returned as typed results, never left unhandled
// - No retry policy here; re-scanning is a presentation decision
// - Single-flight enforcement is the ScanGate's job, not the resolver's

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header, Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{MachineDetails, RawCode, RawMaterialLot, ScanIntent};
use crate::error::{AppError, AppResult};

/// Typed lookup failure. `NotFound` is recoverable (display fallback);
/// the other kinds are surfaced to the operator without automatic retry.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LookupError {
    #[error("No record matched the scanned code")]
    NotFound,

    #[error("Network error: {0}")]
    Network(String),

    #[error("Server error: {message}")]
    Server {
        status: Option<u16>,
        message: String,
    },
}

/// A record the registry matched to a scanned code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ResolvedDetails {
    Machine(MachineDetails),
    RawMaterialLot(RawMaterialLot),
}

/// Resolver seam: given a captured code and the scan intent, fetch the
/// matching domain record or fail with a typed error.
#[async_trait]
pub trait DetailResolver: Send + Sync {
    async fn resolve(
        &self,
        raw_code: &RawCode,
        intent: ScanIntent,
    ) -> Result<ResolvedDetails, LookupError>;
}

/// Bearer credential for the registry API, supplied by whoever composes
/// the pipeline. Token issuance and storage live outside this crate.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub bearer_token: String,
}

impl Credentials {
    pub fn new(bearer_token: impl Into<String>) -> Self {
        Self {
            bearer_token: bearer_token.into(),
        }
    }
}

/// Registry client configuration. Read-only after initialization.
#[derive(Debug, Clone)]
pub struct RegistryConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub credentials: Option<Credentials>,
}

impl RegistryConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: Duration::from_secs(10),
            credentials: None,
        }
    }

    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Response envelope used by every registry endpoint:
/// `{ data: record | null, message?, status? }`
#[derive(Debug, Deserialize)]
struct LookupEnvelope<T> {
    data: Option<T>,
    #[serde(default)]
    #[allow(dead_code)] // Part of the registry envelope schema
    message: Option<String>,
}

/// HTTP implementation of the resolver against the inventory/machine
/// registry endpoints.
pub struct HttpDetailResolver {
    base_url: String,
    http_client: Client,
    credentials: Option<Credentials>,
}

impl HttpDetailResolver {
    pub fn new(config: RegistryConfig) -> AppResult<Self> {
        let http_client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| AppError::Other(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            http_client,
            credentials: config.credentials,
        })
    }

    /// Execute one GET lookup and unwrap the registry envelope.
    /// Returns Ok(None) for a well-formed "no record" response.
    async fn fetch_record<T>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<Option<T>, LookupError>
    where
        T: DeserializeOwned,
    {
        let mut request = self
            .http_client
            .get(format!("{}{}", self.base_url, path))
            .query(query)
            .header(header::ACCEPT, "application/json");

        if let Some(credentials) = &self.credentials {
            request = request.bearer_auth(&credentials.bearer_token);
        }

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                LookupError::Network(format!("request timed out: {}", e))
            } else {
                LookupError::Network(e.to_string())
            }
        })?;

        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            let message = if message.is_empty() {
                format!("registry returned status {}", status)
            } else {
                message
            };
            return Err(LookupError::Server {
                status: Some(status.as_u16()),
                message,
            });
        }

        let envelope: LookupEnvelope<T> = response.json().await.map_err(|e| {
            LookupError::Server {
                status: Some(status.as_u16()),
                message: format!("malformed registry response: {}", e),
            }
        })?;

        Ok(envelope.data)
    }
}

#[async_trait]
impl DetailResolver for HttpDetailResolver {
    async fn resolve(
        &self,
        raw_code: &RawCode,
        intent: ScanIntent,
    ) -> Result<ResolvedDetails, LookupError> {
        match intent {
            ScanIntent::BarcodeRawMaterial => {
                let lot: Option<RawMaterialLot> = self
                    .fetch_record(
                        "/ScannedMaterial/getRawMaterialDetailsByBarcode",
                        &[("barcodeId", raw_code.value.as_str())],
                    )
                    .await?;

                lot.map(ResolvedDetails::RawMaterialLot)
                    .ok_or(LookupError::NotFound)
            }
            ScanIntent::QrMachine => {
                let machine: Option<MachineDetails> = self
                    .fetch_record(
                        "/machine/getMachineDetailController",
                        &[("qrCodeId", raw_code.value.as_str())],
                    )
                    .await?;

                machine
                    .map(ResolvedDetails::Machine)
                    .ok_or(LookupError::NotFound)
            }
        }
    }
}
