// src/services/share.rs
//
// Share Service - human-readable summary of a scan result
//
// Consumes a finished ScanResult and produces the text block the share
// sheet sends out: the matched machine or lot highlights, or the
// classified fallback when no record matched.

use serde_json::json;

use crate::domain::{ClassifiedPayload, ScanDetails, ScanResult};
use crate::error::AppResult;

pub struct ShareService;

impl ShareService {
    pub fn new() -> Self {
        Self
    }

    /// Build the share text: `Scanned {symbology} at {timestamp}:` followed
    /// by a pretty-printed summary of whatever the scan resolved to.
    pub fn build_summary(&self, result: &ScanResult) -> AppResult<String> {
        let captured_at = result.raw_code.captured_at.to_rfc3339();

        let payload = match &result.details {
            ScanDetails::Machine(machine) => json!({
                "qrCode": result.raw_code.value,
                "machineName": machine.name,
                "machineType": machine.machine_type,
                "location": machine.location,
                "identificationNo": machine.identification_no,
                "moulds": machine
                    .moulds
                    .iter()
                    .map(|m| m.mould_name.clone())
                    .collect::<Vec<_>>(),
                "timestamp": captured_at,
            }),
            ScanDetails::RawMaterialLot(lot) => json!({
                "barcode": result.raw_code.value,
                "material": lot.raw_material.name,
                "description": lot.raw_material.description,
                "quantity": format!(
                    "{} {} (Used: {} {})",
                    lot.qty, lot.raw_material.units, lot.used_qty, lot.raw_material.units
                ),
                "timestamp": captured_at,
            }),
            ScanDetails::Unrecognized(classified) => match classified {
                ClassifiedPayload::Json { value } => json!(value),
                ClassifiedPayload::Url {
                    href,
                    hostname,
                    pathname,
                    search,
                } => json!({
                    "type": "URL",
                    "url": href,
                    "hostname": hostname,
                    "pathname": pathname,
                    "search": search,
                }),
                ClassifiedPayload::Text { content } => json!({
                    "type": "Plain Text",
                    "content": content,
                }),
            },
        };

        Ok(format!(
            "Scanned {} at {}:\n{}",
            result.raw_code.symbology,
            captured_at,
            serde_json::to_string_pretty(&payload)?
        ))
    }
}

impl Default for ShareService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        Detection, RawCode, RawMaterial, RawMaterialLot, ScanIntent,
    };

    fn lot() -> RawMaterialLot {
        RawMaterialLot {
            id: "6701bc".to_string(),
            lot_no: "L-2024-117".to_string(),
            part_no: "3/11".to_string(),
            qty: 250.0,
            used_qty: 40.0,
            display_lot_qty: "210 kg".to_string(),
            mrn_no: "MRN-0093".to_string(),
            barcode_id: "8901100113".to_string(),
            is_completed: false,
            raw_material: RawMaterial {
                name: "EP 200".to_string(),
                description: "EPDM compound".to_string(),
                category: "Polymer".to_string(),
                part_no: "3/11".to_string(),
                quantity_per: 1.0,
                units: "kg".to_string(),
                max_quantity: 500.0,
                minimum_quantity: 50.0,
                rate: 320.0,
                reorder_quantity: 100.0,
            },
        }
    }

    #[test]
    fn test_lot_summary_names_material_and_quantity() {
        let result = ScanResult::new(
            RawCode::from_detection(&Detection::new("8901100113", "ean-13")),
            ScanIntent::BarcodeRawMaterial,
            ScanDetails::RawMaterialLot(lot()),
        );

        let summary = ShareService::new().build_summary(&result).unwrap();
        assert!(summary.starts_with("Scanned ean-13 at "));
        assert!(summary.contains("EP 200"));
        assert!(summary.contains("250 kg (Used: 40 kg)"));
    }

    #[test]
    fn test_unrecognized_summary_uses_classified_fallback() {
        let result = ScanResult::new(
            RawCode::from_detection(&Detection::new("plain", "qr")),
            ScanIntent::QrMachine,
            ScanDetails::Unrecognized(ClassifiedPayload::Text {
                content: "plain".to_string(),
            }),
        );

        let summary = ShareService::new().build_summary(&result).unwrap();
        assert!(summary.contains("Plain Text"));
        assert!(summary.contains("plain"));
    }
}
