pub mod entity;

pub use entity::{MachineDetails, Mould};
