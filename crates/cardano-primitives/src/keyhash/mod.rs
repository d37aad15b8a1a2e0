//! Address key hash type.
//!
//! Provides `AddrKeyHash`, the 28-byte BLAKE2b-224 digest of a verification
//! key's raw bytes. Cardano addresses embed this digest as the payment or
//! stake credential, so it serves as the compact identifier of a key.

use std::fmt;
use std::str::FromStr;
use serde::{Serialize, Deserialize, Serializer, Deserializer};
use crate::PrimitivesError;

/// Size of an address key hash in bytes.
pub const ADDR_KEYHASH_SIZE: usize = 28;

/// A 28-byte BLAKE2b-224 digest identifying a verification key.
///
/// Displayed as lowercase hex in natural byte order. Unlike Bitcoin
/// transaction hashes, Cardano key hashes are never byte-reversed.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct AddrKeyHash([u8; ADDR_KEYHASH_SIZE]);

impl AddrKeyHash {
    /// Create an AddrKeyHash from a raw 28-byte array.
    ///
    /// # Arguments
    /// * `bytes` - The 28 digest bytes.
    ///
    /// # Returns
    /// A new `AddrKeyHash`.
    pub fn new(bytes: [u8; ADDR_KEYHASH_SIZE]) -> Self {
        AddrKeyHash(bytes)
    }

    /// Create an AddrKeyHash from a byte slice.
    ///
    /// # Arguments
    /// * `bytes` - A slice that must be exactly 28 bytes.
    ///
    /// # Returns
    /// `Ok(AddrKeyHash)` if the slice is 28 bytes, or an error otherwise.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, PrimitivesError> {
        if bytes.len() != ADDR_KEYHASH_SIZE {
            return Err(PrimitivesError::InvalidHashLength {
                expected: ADDR_KEYHASH_SIZE,
                got: bytes.len(),
            });
        }
        let mut arr = [0u8; ADDR_KEYHASH_SIZE];
        arr.copy_from_slice(bytes);
        Ok(AddrKeyHash(arr))
    }

    /// Create an AddrKeyHash from a hex string.
    ///
    /// # Arguments
    /// * `hex_str` - A 56-character hex string.
    ///
    /// # Returns
    /// `Ok(AddrKeyHash)` on success, or an error for invalid hex or length.
    pub fn from_hex(hex_str: &str) -> Result<Self, PrimitivesError> {
        let bytes = hex::decode(hex_str)?;
        Self::from_bytes(&bytes)
    }

    /// Access the internal byte array as a reference.
    ///
    /// # Returns
    /// A reference to the 28-byte internal array.
    pub fn as_bytes(&self) -> &[u8; ADDR_KEYHASH_SIZE] {
        &self.0
    }

    /// Return a copy of the digest bytes.
    ///
    /// # Returns
    /// A `Vec<u8>` containing the 28 digest bytes.
    pub fn to_vec(&self) -> Vec<u8> {
        self.0.to_vec()
    }

    /// Render the digest as a lowercase hex string.
    ///
    /// # Returns
    /// A 56-character hex string.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

/// Display the digest as lowercase hex in natural byte order.
impl fmt::Display for AddrKeyHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

/// Parse a hex string into an AddrKeyHash.
///
/// Equivalent to `AddrKeyHash::from_hex`.
impl FromStr for AddrKeyHash {
    type Err = PrimitivesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AddrKeyHash::from_hex(s)
    }
}

/// Serialize as a hex string in JSON.
impl Serialize for AddrKeyHash {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

/// Deserialize from a hex string in JSON.
impl<'de> Deserialize<'de> for AddrKeyHash {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        AddrKeyHash::from_hex(&s).map_err(serde::de::Error::custom)
    }
}
