//! Cardano SDK - Hashing and encoding primitives.
//!
//! This crate provides the foundational building blocks for the Cardano SDK:
//! - BLAKE2b digest functions (224-bit and 256-bit raw output)
//! - Address key hash type (28-byte digest identifying a verification key)
//! - CBOR byte-string encoding/decoding for key material

pub mod hash;
pub mod keyhash;
pub mod cbor;

mod error;
pub use error::PrimitivesError;
