// src/domain/raw_material/entity.rs
//
// Raw-material registry records, as returned by the backend barcode lookup.
// Opaque to the pipeline; at most one active lot record exists per barcode.

use serde::{Deserialize, Serialize};

/// Catalogue entry nested inside a lot record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawMaterial {
    pub name: String,
    pub description: String,
    pub category: String,
    pub part_no: String,
    pub quantity_per: f64,
    pub units: String,
    pub max_quantity: f64,
    pub minimum_quantity: f64,
    pub rate: f64,
    pub reorder_quantity: f64,
}

/// Backend lot record, keyed by the barcode printed on the lot label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawMaterialLot {
    #[serde(rename = "_id")]
    pub id: String,
    pub lot_no: String,
    pub part_no: String,
    pub qty: f64,
    pub used_qty: f64,
    pub display_lot_qty: String,
    pub mrn_no: String,
    pub barcode_id: String,
    pub is_completed: bool,
    pub raw_material: RawMaterial,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_backend_lot_record() {
        let payload = json!({
            "_id": "6701bc",
            "lotNo": "L-2024-117",
            "partNo": "3/11",
            "qty": 250.0,
            "usedQty": 40.0,
            "displayLotQty": "210 kg",
            "mrnNo": "MRN-0093",
            "barcodeId": "8901100113",
            "isCompleted": false,
            "rawMaterial": {
                "name": "EP 200",
                "description": "EPDM compound",
                "category": "Polymer",
                "partNo": "3/11",
                "quantityPer": 1.0,
                "units": "kg",
                "maxQuantity": 500.0,
                "minimumQuantity": 50.0,
                "rate": 320.0,
                "reorderQuantity": 100.0
            }
        });

        let lot: RawMaterialLot = serde_json::from_value(payload).unwrap();
        assert_eq!(lot.lot_no, "L-2024-117");
        assert_eq!(lot.barcode_id, "8901100113");
        assert_eq!(lot.raw_material.name, "EP 200");
        assert_eq!(lot.raw_material.units, "kg");
    }
}
