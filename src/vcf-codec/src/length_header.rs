//! The 4-byte length-header word used to frame both the whole record and its
//! required-columns section.
//!
//! Layout: the high two bits of byte 0 are an "extension count" in `0..=3`; only `3` is
//! implemented, meaning "all remaining 30 bits carry the length" (big-endian).

use crate::error::LengthHeaderError;

const EXTENSION_COUNT: u8 = 3;
const MAX_LENGTH: u32 = 0x3FFF_FFFF; // 2^30 - 1

/// Encode `length` into the normative 4-byte big-endian length-header word.
///
/// # Errors
/// Returns [`LengthHeaderError::LengthOverflow`] if `length` does not fit in 30 bits.
pub fn encode_length_header(length: u32) -> Result<[u8; 4], LengthHeaderError> {
    if length > MAX_LENGTH {
        return Err(LengthHeaderError::LengthOverflow(u64::from(length)));
    }
    let be = length.to_be_bytes();
    Ok([(EXTENSION_COUNT << 6) | be[0], be[1], be[2], be[3]])
}

/// Decode a 4-byte big-endian length-header word, rejecting any extension count other than 3.
///
/// # Errors
/// Returns [`LengthHeaderError::UnsupportedExtensionCount`] if the high two bits of `bytes[0]`
/// are not `3`.
pub fn decode_length_header(bytes: [u8; 4]) -> Result<u32, LengthHeaderError> {
    let extension_count = bytes[0] >> 6;
    if extension_count != EXTENSION_COUNT {
        return Err(LengthHeaderError::UnsupportedExtensionCount(extension_count));
    }
    let high = bytes[0] & 0x3F;
    Ok(u32::from_be_bytes([high, bytes[1], bytes[2], bytes[3]]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_small_length() {
        let bytes = encode_length_header(42).unwrap();
        assert_eq!(decode_length_header(bytes).unwrap(), 42);
    }

    #[test]
    fn round_trips_max_length() {
        let bytes = encode_length_header(MAX_LENGTH).unwrap();
        assert_eq!(decode_length_header(bytes).unwrap(), MAX_LENGTH);
    }

    #[test]
    fn rejects_overflow() {
        assert!(encode_length_header(MAX_LENGTH + 1).is_err());
    }

    #[test]
    fn high_bits_carry_extension_count_three() {
        let bytes = encode_length_header(0).unwrap();
        assert_eq!(bytes[0] >> 6, 3);
    }

    #[test]
    fn rejects_extension_count_zero() {
        // high byte 0x00 => extension count 0, reserved/unimplemented.
        let bytes = [0x00, 0x00, 0x00, 0x00];
        let err = decode_length_header(bytes).unwrap_err();
        assert!(matches!(err, LengthHeaderError::UnsupportedExtensionCount(0)));
    }

    #[test]
    fn rejects_every_non_three_extension_count() {
        for ext in [0u8, 1, 2] {
            let bytes = [ext << 6, 0, 0, 0];
            assert!(decode_length_header(bytes).is_err());
        }
    }
}
