// src/domain/scan/entity.rs
//
// Scan Domain - Entities and Value Objects
//
// CRITICAL RULES:
// - RawCode is immutable once captured; exactly one per accepted detection
// - ClassifiedPayload always holds exactly one populated variant
// - ScanResult is created once per successful scan cycle and never mutated
//   after construction; the presentation layer receives it read-only

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::machine::MachineDetails;
use crate::domain::raw_material::RawMaterialLot;

/// What the operator set out to scan. Chosen before the camera opens;
/// determines accepted symbologies and the resolver strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScanIntent {
    QrMachine,
    BarcodeRawMaterial,
}

impl ScanIntent {
    /// Symbologies the camera is allowed to report for this intent.
    pub fn accepted_symbologies(&self) -> &'static [&'static str] {
        match self {
            ScanIntent::QrMachine => &["qr"],
            ScanIntent::BarcodeRawMaterial => {
                &["ean-13", "ean-8", "code-128", "upc-e", "upc-a"]
            }
        }
    }

    pub fn accepts(&self, symbology: &str) -> bool {
        self.accepted_symbologies()
            .iter()
            .any(|s| s.eq_ignore_ascii_case(symbology))
    }
}

impl fmt::Display for ScanIntent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanIntent::QrMachine => write!(f, "qr_machine"),
            ScanIntent::BarcodeRawMaterial => write!(f, "barcode_raw_material"),
        }
    }
}

/// A single code reported by the camera collaborator.
/// Wire contract: `{ value, type }` tuple (symbology name as string).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Detection {
    pub value: String,
    #[serde(rename = "type")]
    pub symbology: String,
}

impl Detection {
    pub fn new(value: impl Into<String>, symbology: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            symbology: symbology.into(),
        }
    }
}

/// The raw scanned code, captured exactly once per accepted camera event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawCode {
    pub value: String,
    pub symbology: String,
    pub captured_at: DateTime<Utc>,
}

impl RawCode {
    pub fn from_detection(detection: &Detection) -> Self {
        Self {
            value: detection.value.clone(),
            symbology: detection.symbology.clone(),
            captured_at: Utc::now(),
        }
    }
}

/// Structural classification of a scanned payload.
/// Produced by the classifier as a display fallback when the backend
/// registry holds no matching record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ClassifiedPayload {
    /// Payload parsed as a JSON object or array; contents flattened
    /// into a string-keyed mapping for display.
    Json { value: BTreeMap<String, String> },
    /// Payload parsed as a URL.
    Url {
        href: String,
        hostname: String,
        pathname: String,
        search: String,
    },
    /// Terminal fallback: the payload verbatim.
    Text { content: String },
}

/// Domain half of a ScanResult: either a backend record matched the code,
/// or the classified payload stands in for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ScanDetails {
    Machine(MachineDetails),
    RawMaterialLot(RawMaterialLot),
    Unrecognized(ClassifiedPayload),
}

impl ScanDetails {
    /// True when the backend registry matched the scanned code.
    pub fn is_recognized(&self) -> bool {
        !matches!(self, ScanDetails::Unrecognized(_))
    }
}

/// Terminal output of one scan cycle. Owned by the orchestrator until
/// handed to presentation, then read-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanResult {
    pub raw_code: RawCode,
    pub intent: ScanIntent,
    pub details: ScanDetails,
    pub resolved_at: DateTime<Utc>,
}

impl ScanResult {
    pub fn new(raw_code: RawCode, intent: ScanIntent, details: ScanDetails) -> Self {
        Self {
            raw_code,
            intent,
            details,
            resolved_at: Utc::now(),
        }
    }

    pub fn machine(&self) -> Option<&MachineDetails> {
        match &self.details {
            ScanDetails::Machine(machine) => Some(machine),
            _ => None,
        }
    }

    pub fn raw_material_lot(&self) -> Option<&RawMaterialLot> {
        match &self.details {
            ScanDetails::RawMaterialLot(lot) => Some(lot),
            _ => None,
        }
    }

    /// Display fallback, present only when no backend record matched.
    pub fn classified(&self) -> Option<&ClassifiedPayload> {
        match &self.details {
            ScanDetails::Unrecognized(classified) => Some(classified),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intent_symbology_acceptance() {
        assert!(ScanIntent::QrMachine.accepts("qr"));
        assert!(ScanIntent::QrMachine.accepts("QR"));
        assert!(!ScanIntent::QrMachine.accepts("ean-13"));

        assert!(ScanIntent::BarcodeRawMaterial.accepts("ean-13"));
        assert!(ScanIntent::BarcodeRawMaterial.accepts("code-128"));
        assert!(!ScanIntent::BarcodeRawMaterial.accepts("qr"));
    }

    #[test]
    fn test_raw_code_carries_detection_verbatim() {
        let detection = Detection::new("B1", "ean-13");
        let raw = RawCode::from_detection(&detection);
        assert_eq!(raw.value, "B1");
        assert_eq!(raw.symbology, "ean-13");
    }

    #[test]
    fn test_scan_details_recognition() {
        let fallback = ScanDetails::Unrecognized(ClassifiedPayload::Text {
            content: "B1".to_string(),
        });
        assert!(!fallback.is_recognized());

        let result = ScanResult::new(
            RawCode::from_detection(&Detection::new("B1", "ean-13")),
            ScanIntent::BarcodeRawMaterial,
            fallback,
        );
        assert!(result.machine().is_none());
        assert!(result.raw_material_lot().is_none());
        assert!(result.classified().is_some());
    }
}
