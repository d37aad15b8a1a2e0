//! Typed Ed25519 key model with the Cardano text-envelope format.
//!
//! A key is raw Ed25519 bytes plus two metadata strings: a machine-readable
//! type tag and a human-readable description. Keys persist as a JSON
//! envelope whose `cborHex` field carries the payload wrapped in a CBOR byte
//! string and hex-encoded, the key file layout emitted by the node tooling.
//!
//! Capabilities are split across traits: verification keys hash into address
//! credentials and check signatures, signing keys produce signatures, and
//! using a key in the other role does not compile.

use std::fs;
use std::io;
use std::path::Path;

use ed25519_dalek::Signer as _;
use ed25519_dalek::{PUBLIC_KEY_LENGTH, SECRET_KEY_LENGTH, SIGNATURE_LENGTH};
use serde::{Deserialize, Serialize};

use cardano_primitives::cbor;
use cardano_primitives::hash::blake2b_224;
use cardano_primitives::keyhash::AddrKeyHash;

use crate::error::KeyError;

pub mod payment;
pub mod stake;

pub use payment::{PaymentKeyPair, PaymentSigningKey, PaymentVerificationKey};
pub use stake::{StakeKeyPair, StakeSigningKey, StakeVerificationKey};

/// The JSON key file layout: `type`, `description`, `cborHex`.
#[derive(Serialize, Deserialize)]
struct KeyEnvelope {
    #[serde(rename = "type")]
    key_type: String,
    description: String,
    #[serde(rename = "cborHex")]
    cbor_hex: String,
}

/// Raw key container: payload bytes plus interchange metadata.
///
/// Metadata participates in identity: two keys with equal bytes but
/// different declared types are different keys. The container is immutable
/// once built.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Key {
    payload: Vec<u8>,
    key_type: String,
    description: String,
}

impl Key {
    /// Create a key container from payload bytes and explicit metadata.
    pub fn new(
        payload: Vec<u8>,
        key_type: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Key {
            payload,
            key_type: key_type.into(),
            description: description.into(),
        }
    }

    /// The raw key bytes.
    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    /// The machine-readable type tag.
    pub fn key_type(&self) -> &str {
        &self.key_type
    }

    /// The human-readable label.
    pub fn description(&self) -> &str {
        &self.description
    }
}

/// Shared behavior of every concrete key variant.
///
/// Implementors fix the envelope constants and expose their raw container;
/// construction, serialization, and the envelope codec are provided.
pub trait TypedKey: Sized {
    /// Type tag written to envelopes and checked on validated restoration.
    const KEY_TYPE: &'static str;
    /// Label written to envelopes when none is supplied.
    const DESCRIPTION: &'static str;

    /// Wrap a raw container in this variant.
    fn from_key(key: Key) -> Self;

    /// Borrow the raw container.
    fn as_key(&self) -> &Key;

    /// Create a key with metadata defaulted to the variant constants.
    fn new(payload: Vec<u8>) -> Self {
        Self::from_key(Key::new(payload, Self::KEY_TYPE, Self::DESCRIPTION))
    }

    /// Create a key carrying explicit metadata, e.g. restored from a file.
    fn with_metadata(payload: Vec<u8>, key_type: &str, description: &str) -> Self {
        Self::from_key(Key::new(payload, key_type, description))
    }

    /// The raw key bytes.
    fn payload(&self) -> &[u8] {
        self.as_key().payload()
    }

    /// The machine-readable type tag.
    fn key_type(&self) -> &str {
        self.as_key().key_type()
    }

    /// The human-readable label.
    fn description(&self) -> &str {
        self.as_key().description()
    }

    /// Serialize to raw bytes: the payload, unchanged.
    fn serialize(&self) -> &[u8] {
        self.as_key().payload()
    }

    /// Rebuild a key from raw payload bytes.
    ///
    /// Inverse of [`serialize`](Self::serialize) for the payload only; the
    /// raw form carries no metadata, so the variant constants come back.
    fn deserialize(bytes: &[u8]) -> Self {
        Self::new(bytes.to_vec())
    }

    /// CBOR-wrap the payload as a byte string.
    fn to_cbor(&self) -> Vec<u8> {
        cbor::encode_bytes(self.serialize())
    }

    /// Lowercase hex of the CBOR-wrapped payload (the `cborHex` field).
    fn to_cbor_hex(&self) -> String {
        cbor::encode_bytes_hex(self.serialize())
    }

    /// Restore a key from a CBOR byte string, metadata defaulted.
    fn from_cbor(data: &[u8]) -> Result<Self, KeyError> {
        Ok(Self::deserialize(&cbor::decode_bytes(data)?))
    }

    /// Restore a key from hex-encoded CBOR, metadata defaulted.
    fn from_cbor_hex(text: &str) -> Result<Self, KeyError> {
        Ok(Self::deserialize(&cbor::decode_bytes_hex(text)?))
    }

    /// Render the JSON envelope.
    fn to_json(&self) -> String {
        let envelope = KeyEnvelope {
            key_type: self.key_type().to_string(),
            description: self.description().to_string(),
            cbor_hex: self.to_cbor_hex(),
        };
        serde_json::to_string(&envelope).expect("string-only envelope always serializes")
    }

    /// Restore a key from a JSON envelope.
    ///
    /// The envelope's own `type` and `description` stay on the restored key.
    /// With `validate_type`, a `type` field other than exactly
    /// [`KEY_TYPE`](Self::KEY_TYPE) is rejected, which stops e.g. a stake key
    /// file from loading where a payment key is expected.
    fn from_json(data: &str, validate_type: bool) -> Result<Self, KeyError> {
        let envelope: KeyEnvelope =
            serde_json::from_str(data).map_err(|e| KeyError::MalformedJson(e.to_string()))?;
        if validate_type && envelope.key_type != Self::KEY_TYPE {
            return Err(KeyError::InvalidKeyType {
                expected: Self::KEY_TYPE.to_string(),
                got: envelope.key_type,
            });
        }
        let payload = cbor::decode_bytes_hex(&envelope.cbor_hex)?;
        Ok(Self::with_metadata(
            payload,
            &envelope.key_type,
            &envelope.description,
        ))
    }

    /// Write the JSON envelope to a new file.
    ///
    /// Refuses to overwrite an existing non-empty file.
    fn save(&self, path: impl AsRef<Path>) -> Result<(), KeyError> {
        let path = path.as_ref();
        if path.is_file() && fs::metadata(path)?.len() > 0 {
            return Err(KeyError::Io(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("file {} already exists", path.display()),
            )));
        }
        Ok(fs::write(path, self.to_json())?)
    }

    /// Read a key back from a JSON envelope file.
    fn load(path: impl AsRef<Path>) -> Result<Self, KeyError> {
        Self::from_json(&fs::read_to_string(path)?, false)
    }
}

/// The hash-and-verify role of verification keys.
pub trait VerificationKey: TypedKey {
    /// Compute the 28-byte BLAKE2b-224 address key hash of the payload.
    ///
    /// The digest is taken over the raw key bytes, with no CBOR wrapping,
    /// and is the credential embedded in addresses.
    fn hash(&self) -> AddrKeyHash {
        AddrKeyHash::new(blake2b_224(self.as_key().payload()))
    }

    /// Check an Ed25519 signature over `message` against this key.
    ///
    /// Returns `Ok(false)` for malformed or non-verifying signatures. A
    /// payload that is not a valid 32-byte Ed25519 public key fails with
    /// `InvalidKeyMaterial`.
    fn verify(&self, message: &[u8], signature: &[u8]) -> Result<bool, KeyError> {
        let public: [u8; PUBLIC_KEY_LENGTH] = self.as_key().payload().try_into().map_err(|_| {
            KeyError::InvalidKeyMaterial(format!(
                "expected {} byte verification key, got {}",
                PUBLIC_KEY_LENGTH,
                self.as_key().payload().len()
            ))
        })?;
        let verifier = ed25519_dalek::VerifyingKey::from_bytes(&public)
            .map_err(|e| KeyError::InvalidKeyMaterial(e.to_string()))?;
        let signature: [u8; SIGNATURE_LENGTH] = match signature.try_into() {
            Ok(bytes) => bytes,
            Err(_) => return Ok(false),
        };
        let signature = ed25519_dalek::Signature::from_bytes(&signature);
        Ok(verifier.verify_strict(message, &signature).is_ok())
    }
}

/// The signing role of signing keys.
pub trait SigningKey: TypedKey {
    /// Sign a message with the key payload as the Ed25519 seed.
    ///
    /// Ed25519 signing is deterministic: the same payload and message always
    /// produce the same 64-byte signature. The message is signed as-is, with
    /// no prehashing and no domain separation.
    fn sign(&self, message: &[u8]) -> Result<Vec<u8>, KeyError> {
        let seed: [u8; SECRET_KEY_LENGTH] = self.as_key().payload().try_into().map_err(|_| {
            KeyError::InvalidKeyMaterial(format!(
                "expected {} byte signing key, got {}",
                SECRET_KEY_LENGTH,
                self.as_key().payload().len()
            ))
        })?;
        let signer = ed25519_dalek::SigningKey::from_bytes(&seed);
        Ok(signer.sign(message).to_bytes().to_vec())
    }
}

/// Derive the Ed25519 public key bytes for a 32-byte private seed.
pub(crate) fn derive_public(seed: &[u8]) -> Result<[u8; PUBLIC_KEY_LENGTH], KeyError> {
    let seed: [u8; SECRET_KEY_LENGTH] = seed.try_into().map_err(|_| {
        KeyError::InvalidKeyMaterial(format!(
            "expected {} byte signing key, got {}",
            SECRET_KEY_LENGTH,
            seed.len()
        ))
    })?;
    Ok(ed25519_dalek::SigningKey::from_bytes(&seed)
        .verifying_key()
        .to_bytes())
}
