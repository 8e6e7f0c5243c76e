pub mod entity;
pub mod invariants;

pub use entity::{
    ClassifiedPayload, Detection, RawCode, ScanDetails, ScanIntent, ScanResult,
};
pub use invariants::validate_raw_code;
