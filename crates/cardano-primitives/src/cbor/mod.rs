//! CBOR byte-string codec for key material.
//!
//! Key payloads travel as a single CBOR definite-length byte string (major
//! type 2), hex-encoded when embedded in text envelopes. This module wraps
//! and unwraps that one shape; key files need nothing else of CBOR.

use minicbor::{Decoder, Encoder};

use crate::PrimitivesError;

/// Wrap a payload in a CBOR byte string.
///
/// # Arguments
/// * `payload` - Raw bytes to wrap.
///
/// # Returns
/// The CBOR encoding: a definite-length byte-string header followed by the
/// payload bytes.
pub fn encode_bytes(payload: &[u8]) -> Vec<u8> {
    let mut buf = Vec::with_capacity(payload.len() + 9);
    let mut encoder = Encoder::new(&mut buf);
    encoder.bytes(payload).expect("writing to a Vec cannot fail");
    buf
}

/// Unwrap a CBOR byte string back to the raw payload.
///
/// Rejects any item that is not a byte string, and any input with bytes
/// remaining after the byte string ends.
///
/// # Arguments
/// * `data` - A complete CBOR encoding of a single byte string.
///
/// # Returns
/// The payload bytes, or an error for malformed or trailing input.
pub fn decode_bytes(data: &[u8]) -> Result<Vec<u8>, PrimitivesError> {
    let mut decoder = Decoder::new(data);
    let payload = decoder.bytes()?.to_vec();
    if decoder.position() != data.len() {
        return Err(PrimitivesError::InvalidCbor(format!(
            "trailing bytes after byte string: consumed {} of {}",
            decoder.position(),
            data.len()
        )));
    }
    Ok(payload)
}

/// Wrap a payload in a CBOR byte string and hex-encode the result.
///
/// This is the `cborHex` wire form of key envelopes.
///
/// # Arguments
/// * `payload` - Raw bytes to wrap.
///
/// # Returns
/// A lowercase hex string of the CBOR encoding.
pub fn encode_bytes_hex(payload: &[u8]) -> String {
    hex::encode(encode_bytes(payload))
}

/// Decode a hex string of a CBOR byte string back to the raw payload.
///
/// # Arguments
/// * `text` - Hex text of a complete CBOR byte-string encoding.
///
/// # Returns
/// The payload bytes, or an error for invalid hex or malformed CBOR.
pub fn decode_bytes_hex(text: &str) -> Result<Vec<u8>, PrimitivesError> {
    let data = hex::decode(text)?;
    decode_bytes(&data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_payload() {
        let encoded = encode_bytes(b"");
        assert_eq!(encoded, vec![0x40]);
        assert_eq!(decode_bytes(&encoded).unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_short_payload_uses_compact_header() {
        // Lengths below 24 fit in the major-type byte itself.
        let encoded = encode_bytes(&[1u8; 23]);
        assert_eq!(encoded[0], 0x57);
        assert_eq!(encoded.len(), 24);
    }

    #[test]
    fn test_key_sized_payload_header() {
        // A 32-byte key encodes with a one-byte length: 0x58 0x20.
        let encoded = encode_bytes(&[0u8; 32]);
        assert_eq!(&encoded[..2], &[0x58, 0x20]);
        assert_eq!(encoded.len(), 34);
    }

    #[test]
    fn test_roundtrip() {
        let payload = b"arbitrary key material".to_vec();
        assert_eq!(decode_bytes(&encode_bytes(&payload)).unwrap(), payload);
    }

    #[test]
    fn test_hex_form() {
        let text = encode_bytes_hex(&[0u8; 32]);
        assert_eq!(text, format!("5820{}", "00".repeat(32)));
        assert_eq!(decode_bytes_hex(&text).unwrap(), vec![0u8; 32]);
    }

    #[test]
    fn test_rejects_non_byte_string() {
        // 0x80 is an empty array, not a byte string.
        let err = decode_bytes(&[0x80]).unwrap_err();
        assert!(matches!(err, PrimitivesError::InvalidCbor(_)));
    }

    #[test]
    fn test_rejects_trailing_bytes() {
        // A one-byte string followed by a stray byte.
        let err = decode_bytes(&[0x41, 0x01, 0x00]).unwrap_err();
        assert!(matches!(err, PrimitivesError::InvalidCbor(_)));
    }

    #[test]
    fn test_rejects_truncated_input() {
        // Header promises 32 bytes, none follow.
        assert!(decode_bytes(&[0x58, 0x20]).is_err());
        assert!(decode_bytes(&[]).is_err());
    }

    #[test]
    fn test_rejects_bad_hex() {
        let err = decode_bytes_hex("not hex at all").unwrap_err();
        assert!(matches!(err, PrimitivesError::InvalidHex(_)));
    }
}
