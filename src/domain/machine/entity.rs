// src/domain/machine/entity.rs
//
// Machine registry records, as returned by the backend machine lookup.
// The pipeline treats these as opaque payloads: their shape is a contract
// with the backend, not something the core reasons about beyond
// presence/absence.

use serde::{Deserialize, Serialize};

/// A mould currently associated with a machine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mould {
    pub mould_id: String,
    pub mould_name: String,
}

/// Backend machine record, keyed by the QR identifier on the machine plate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MachineDetails {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub machine_type: String,
    pub description: String,
    pub capacity_or_spec: String,
    pub identification_no: String,
    pub make: String,
    pub location: String,
    // Wire field is capitalized on the backend
    #[serde(rename = "InstallationOn")]
    pub installation_on: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,
    #[serde(default)]
    pub product_id_arr: Vec<String>,
    pub assembly_bool: bool,
    pub loading_capacity: String,
    pub created_at: String,
    pub updated_at: String,
    #[serde(default)]
    pub moulds: Vec<Mould>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_backend_machine_record() {
        let payload = json!({
            "_id": "6613a0",
            "name": "Press 40T",
            "machineType": "Hydraulic Press",
            "description": "Main moulding press",
            "capacityOrSpec": "40 tons",
            "identificationNo": "MC-040",
            "make": "ACME",
            "location": "Bay 2",
            "InstallationOn": "2023-04-01T00:00:00.000Z",
            "assemblyBool": false,
            "loadingCapacity": "1200",
            "createdAt": "2023-04-02T08:00:00.000Z",
            "updatedAt": "2024-11-20T10:30:00.000Z",
            "moulds": [
                {"mouldId": "mo-1", "mouldName": "ORNAMENT YXA"}
            ]
        });

        let machine: MachineDetails = serde_json::from_value(payload).unwrap();
        assert_eq!(machine.id, "6613a0");
        assert_eq!(machine.name, "Press 40T");
        assert_eq!(machine.remarks, None);
        assert!(machine.product_id_arr.is_empty());
        assert_eq!(machine.moulds.len(), 1);
        assert_eq!(machine.moulds[0].mould_name, "ORNAMENT YXA");
    }
}
