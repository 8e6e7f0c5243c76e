// src/registry/mod.rs
//
// Registry Lookup - trait seams and HTTP client

pub mod detail_resolver;

pub use detail_resolver::{
    Credentials, DetailResolver, HttpDetailResolver, LookupError, RegistryConfig,
    ResolvedDetails,
};
