//! Health Records Test Suite
//!
//! Cross-crate scenarios for the patient directory:
//! - Lookup outcomes against the seed dataset
//! - Property tests tying the validator to directory lookups
//! - Credential store behaviour


pub mod lookup;
pub mod lookup_properties;
pub mod users;
