//! Payment key variants and key pair factory.
//!
//! Payment keys control spending: the verification key's hash becomes the
//! payment credential of an address, and the signing key authorizes
//! transactions spending from that address.

use std::fmt;

use rand::rngs::OsRng;

use crate::error::KeyError;
use crate::key::{derive_public, Key, SigningKey, TypedKey, VerificationKey};

/// A payment signing key: a 32-byte Ed25519 seed.
#[derive(Clone, PartialEq, Eq)]
pub struct PaymentSigningKey(Key);

impl TypedKey for PaymentSigningKey {
    const KEY_TYPE: &'static str = "PaymentSigningKeyShelley_ed25519";
    // The node tooling labels signing key files with the verification key
    // text; key files must match it byte for byte.
    const DESCRIPTION: &'static str = "Payment Verification Key";

    fn from_key(key: Key) -> Self {
        PaymentSigningKey(key)
    }

    fn as_key(&self) -> &Key {
        &self.0
    }
}

impl SigningKey for PaymentSigningKey {}

impl fmt::Display for PaymentSigningKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_json())
    }
}

impl fmt::Debug for PaymentSigningKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_json())
    }
}

/// A payment verification key: a 32-byte Ed25519 public key.
#[derive(Clone, PartialEq, Eq)]
pub struct PaymentVerificationKey(Key);

impl TypedKey for PaymentVerificationKey {
    const KEY_TYPE: &'static str = "PaymentVerificationKeyShelley_ed25519";
    const DESCRIPTION: &'static str = "Payment Verification Key";

    fn from_key(key: Key) -> Self {
        PaymentVerificationKey(key)
    }

    fn as_key(&self) -> &Key {
        &self.0
    }
}

impl VerificationKey for PaymentVerificationKey {}

impl fmt::Display for PaymentVerificationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_json())
    }
}

impl fmt::Debug for PaymentVerificationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_json())
    }
}

/// A linked payment signing/verification key pair.
///
/// The verification key is always the derived public counterpart of the
/// signing key's seed.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct PaymentKeyPair {
    /// The private half.
    pub signing_key: PaymentSigningKey,
    /// The public half, derived from the signing key.
    pub verification_key: PaymentVerificationKey,
}

impl PaymentKeyPair {
    /// Pair up an existing signing and verification key.
    pub fn new(
        signing_key: PaymentSigningKey,
        verification_key: PaymentVerificationKey,
    ) -> Self {
        PaymentKeyPair {
            signing_key,
            verification_key,
        }
    }

    /// Generate a key pair from a fresh OS-random seed.
    pub fn generate() -> Self {
        let signer = ed25519_dalek::SigningKey::generate(&mut OsRng);
        let public = signer.verifying_key();
        PaymentKeyPair {
            signing_key: PaymentSigningKey::new(signer.to_bytes().to_vec()),
            verification_key: PaymentVerificationKey::new(public.to_bytes().to_vec()),
        }
    }

    /// Rebuild a key pair from existing signing key bytes.
    ///
    /// The verification key is derived from the seed, so the restored pair
    /// is always cryptographically linked.
    pub fn from_private_key(signing_key: &[u8]) -> Result<Self, KeyError> {
        let public = derive_public(signing_key)?;
        Ok(PaymentKeyPair {
            signing_key: PaymentSigningKey::new(signing_key.to_vec()),
            verification_key: PaymentVerificationKey::new(public.to_vec()),
        })
    }
}
