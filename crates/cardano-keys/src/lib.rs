//! Cardano SDK - Shelley key model and interchange format.
//!
//! This crate provides the typed Ed25519 key model for the Cardano SDK:
//! - Payment and stake signing/verification key types
//! - Address key hashing, message signing, and signature verification
//! - The JSON text-envelope key file format (`type`/`description`/`cborHex`)
//! - Key pair generation and seed-based reconstruction

pub mod key;

mod error;
pub use error::KeyError;
