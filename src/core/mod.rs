// src/core/mod.rs
//! Core services shared by the web and command line front ends

pub mod profile_store;
pub mod service_client;

pub use profile_store::{
    FileProfileStore, MemoryProfileStore, ProfileStore, StoredProfile, PROFILE_SCHEMA_VERSION,
};
pub use service_client::ServiceClient;
