/// Unified error type for all primitives operations.
///
/// Covers errors from hash construction, hex decoding, and the CBOR
/// byte-string codec.
#[derive(Debug, thiserror::Error)]
pub enum PrimitivesError {
    #[error("invalid hash length: expected {expected}, got {got}")]
    InvalidHashLength { expected: usize, got: usize },

    #[error("invalid hex: {0}")]
    InvalidHex(String),

    #[error("invalid cbor: {0}")]
    InvalidCbor(String),
}

impl From<hex::FromHexError> for PrimitivesError {
    fn from(e: hex::FromHexError) -> Self {
        PrimitivesError::InvalidHex(e.to_string())
    }
}

impl From<minicbor::decode::Error> for PrimitivesError {
    fn from(e: minicbor::decode::Error) -> Self {
        PrimitivesError::InvalidCbor(e.to_string())
    }
}
