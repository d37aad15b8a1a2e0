//! Stake key variants and key pair factory.
//!
//! Stake keys control delegation and rewards: the verification key's hash is
//! the staking credential of an address, and the signing key authorizes
//! delegation certificates and reward withdrawals.

use std::fmt;

use rand::rngs::OsRng;

use crate::error::KeyError;
use crate::key::{derive_public, Key, SigningKey, TypedKey, VerificationKey};

/// A stake signing key: a 32-byte Ed25519 seed.
#[derive(Clone, PartialEq, Eq)]
pub struct StakeSigningKey(Key);

impl TypedKey for StakeSigningKey {
    const KEY_TYPE: &'static str = "StakeSigningKeyShelley_ed25519";
    // Same labeling quirk as the payment signing key: the node tooling
    // writes the verification key text.
    const DESCRIPTION: &'static str = "Stake Verification Key";

    fn from_key(key: Key) -> Self {
        StakeSigningKey(key)
    }

    fn as_key(&self) -> &Key {
        &self.0
    }
}

impl SigningKey for StakeSigningKey {}

impl fmt::Display for StakeSigningKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_json())
    }
}

impl fmt::Debug for StakeSigningKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_json())
    }
}

/// A stake verification key: a 32-byte Ed25519 public key.
#[derive(Clone, PartialEq, Eq)]
pub struct StakeVerificationKey(Key);

impl TypedKey for StakeVerificationKey {
    const KEY_TYPE: &'static str = "StakeVerificationKeyShelley_ed25519";
    const DESCRIPTION: &'static str = "Stake Verification Key";

    fn from_key(key: Key) -> Self {
        StakeVerificationKey(key)
    }

    fn as_key(&self) -> &Key {
        &self.0
    }
}

impl VerificationKey for StakeVerificationKey {}

impl fmt::Display for StakeVerificationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_json())
    }
}

impl fmt::Debug for StakeVerificationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_json())
    }
}

/// A linked stake signing/verification key pair.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct StakeKeyPair {
    /// The private half.
    pub signing_key: StakeSigningKey,
    /// The public half, derived from the signing key.
    pub verification_key: StakeVerificationKey,
}

impl StakeKeyPair {
    /// Pair up an existing signing and verification key.
    pub fn new(signing_key: StakeSigningKey, verification_key: StakeVerificationKey) -> Self {
        StakeKeyPair {
            signing_key,
            verification_key,
        }
    }

    /// Generate a key pair from a fresh OS-random seed.
    pub fn generate() -> Self {
        let signer = ed25519_dalek::SigningKey::generate(&mut OsRng);
        let public = signer.verifying_key();
        StakeKeyPair {
            signing_key: StakeSigningKey::new(signer.to_bytes().to_vec()),
            verification_key: StakeVerificationKey::new(public.to_bytes().to_vec()),
        }
    }

    /// Rebuild a key pair from existing signing key bytes.
    pub fn from_private_key(signing_key: &[u8]) -> Result<Self, KeyError> {
        let public = derive_public(signing_key)?;
        Ok(StakeKeyPair {
            signing_key: StakeSigningKey::new(signing_key.to_vec()),
            verification_key: StakeVerificationKey::new(public.to_vec()),
        })
    }
}
