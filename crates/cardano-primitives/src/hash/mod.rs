//! BLAKE2b hash primitives for the Cardano SDK.
//!
//! Cardano hashes with BLAKE2b at two output lengths: 224 bits for address
//! key hashes and script hashes, and 256 bits for transaction and datum
//! identifiers. Both variants use raw (unkeyed, unsalted) BLAKE2b over the
//! input bytes.

use blake2::digest::{Update, VariableOutput};
use blake2::Blake2bVar;

/// Compute a BLAKE2b digest with 28-byte (224-bit) output.
///
/// This is the digest applied to a verification key's raw bytes to produce
/// an address key hash.
///
/// # Arguments
/// * `data` - Byte slice to hash.
///
/// # Returns
/// A 28-byte BLAKE2b-224 digest.
pub fn blake2b_224(data: &[u8]) -> [u8; 28] {
    let mut hasher = Blake2bVar::new(28).expect("28 is a valid BLAKE2b output length");
    hasher.update(data);
    let mut output = [0u8; 28];
    hasher
        .finalize_variable(&mut output)
        .expect("output buffer matches digest length");
    output
}

/// Compute a BLAKE2b digest with 32-byte (256-bit) output.
///
/// Used for transaction bodies, datums, and other 32-byte identifiers.
///
/// # Arguments
/// * `data` - Byte slice to hash.
///
/// # Returns
/// A 32-byte BLAKE2b-256 digest.
pub fn blake2b_256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Blake2bVar::new(32).expect("32 is a valid BLAKE2b output length");
    hasher.update(data);
    let mut output = [0u8; 32];
    hasher
        .finalize_variable(&mut output)
        .expect("output buffer matches digest length");
    output
}
