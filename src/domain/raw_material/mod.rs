pub mod entity;

pub use entity::{RawMaterial, RawMaterialLot};
