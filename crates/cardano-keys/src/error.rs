use cardano_primitives::PrimitivesError;

/// Error types for key construction, signing, and interchange.
#[derive(Debug, thiserror::Error)]
pub enum KeyError {
    #[error("invalid key type: expected {expected}, got {got}")]
    InvalidKeyType { expected: String, got: String },

    #[error("malformed key envelope: {0}")]
    MalformedJson(String),

    #[error("invalid key material: {0}")]
    InvalidKeyMaterial(String),

    #[error("primitives error: {0}")]
    Primitives(#[from] PrimitivesError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
