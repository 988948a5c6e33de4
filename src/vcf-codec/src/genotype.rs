//! Bit layout for a single sample-run byte.
//!
//! A byte with its high bit clear is a run of `"0|0"`, with the low 7 bits carrying the run
//! length (1..=127). A byte with its high bit set is always classified by its full **3** high
//! bits, never by the high bit alone: `0b111_xxxxx` is the uncompressed/literal marker, and the
//! remaining three 3-bit patterns are the `"0|1"`, `"1|0"` and `"1|1"` runs. Testing only the
//! high bit against [`constants::SAMPLE_MASKED_11`] would misclassify an uncompressed byte as a
//! `"1|1"` run, since both have the high bit set; the uncompressed pattern must be checked first.

use crate::constants::{
    GT_00, GT_01, GT_10, GT_11, SAMPLE_MASKED_00, SAMPLE_MASKED_01, SAMPLE_MASKED_10,
    SAMPLE_MASKED_11, SAMPLE_MASKED_UNCOMPRESSED, SAMPLE_MASK_00, SAMPLE_MASK_GENOTYPE,
    SAMPLE_MAX_RUN_00, SAMPLE_MAX_RUN_GENOTYPE,
};
use crate::error::LineCodecError;

/// The four recognized biallelic, phased genotype tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Genotype {
    Hom00,
    Het01,
    Het10,
    Hom11,
}

impl Genotype {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Genotype::Hom00 => GT_00,
            Genotype::Het01 => GT_01,
            Genotype::Het10 => GT_10,
            Genotype::Hom11 => GT_11,
        }
    }

    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            GT_00 => Some(Genotype::Hom00),
            GT_01 => Some(Genotype::Het01),
            GT_10 => Some(Genotype::Het10),
            GT_11 => Some(Genotype::Hom11),
            _ => None,
        }
    }

    /// Maximum run length this genotype's byte layout can encode in a single byte.
    #[must_use]
    pub fn max_run(self) -> u8 {
        match self {
            Genotype::Hom00 => SAMPLE_MAX_RUN_00,
            _ => SAMPLE_MAX_RUN_GENOTYPE,
        }
    }
}

/// The decoded meaning of a single run byte: either a genotype run or a literal/uncompressed
/// marker carrying the count of raw tokens that follow in the stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunToken {
    Run(Genotype, u8),
    Uncompressed(u8),
}

/// Encode one run of `count` repetitions of `genotype` into a single byte.
///
/// # Errors
/// Returns [`LineCodecError::RunOverflow`] if `count` is zero or exceeds the genotype's maximum
/// representable run length.
pub fn encode_run(genotype: Genotype, count: u8) -> Result<u8, LineCodecError> {
    let max = genotype.max_run();
    if count == 0 || count > max {
        return Err(LineCodecError::RunOverflow { count: count as usize, max });
    }
    Ok(match genotype {
        Genotype::Hom00 => SAMPLE_MASKED_00 | count,
        Genotype::Het01 => SAMPLE_MASKED_01 | count,
        Genotype::Het10 => SAMPLE_MASKED_10 | count,
        Genotype::Hom11 => SAMPLE_MASKED_11 | count,
    })
}

/// Encode the uncompressed/literal marker byte for `count` raw tokens (1..=31).
///
/// # Errors
/// Returns [`LineCodecError::RunOverflow`] if `count` is zero or exceeds 31.
pub fn encode_uncompressed(count: u8) -> Result<u8, LineCodecError> {
    if count == 0 || count > SAMPLE_MAX_RUN_GENOTYPE {
        return Err(LineCodecError::RunOverflow { count: count as usize, max: SAMPLE_MAX_RUN_GENOTYPE });
    }
    Ok(SAMPLE_MASKED_UNCOMPRESSED | count)
}

/// Decode a single run byte into its [`RunToken`].
///
/// The high bit is tested first: if clear, this is a `"0|0"` run. Otherwise the byte is
/// classified by its full 3-bit genotype mask, with the uncompressed pattern (`0b111`) checked
/// ahead of the three genotype patterns so it can never be mistaken for `"1|1"`.
///
/// # Errors
/// Returns [`LineCodecError::UnknownGenotypeBitmask`] if the masked bits do not match any known
/// pattern (unreachable for the current mask table, kept for forward compatibility).
pub fn decode_byte(byte: u8) -> Result<RunToken, LineCodecError> {
    if byte & SAMPLE_MASK_00 == SAMPLE_MASKED_00 {
        return Ok(RunToken::Run(Genotype::Hom00, byte & SAMPLE_MAX_RUN_00));
    }
    let count = byte & SAMPLE_MAX_RUN_GENOTYPE;
    match byte & SAMPLE_MASK_GENOTYPE {
        SAMPLE_MASKED_UNCOMPRESSED => Ok(RunToken::Uncompressed(count)),
        SAMPLE_MASKED_01 => Ok(RunToken::Run(Genotype::Het01, count)),
        SAMPLE_MASKED_10 => Ok(RunToken::Run(Genotype::Het10, count)),
        m if m == (SAMPLE_MASKED_11 & SAMPLE_MASK_GENOTYPE) => {
            Ok(RunToken::Run(Genotype::Hom11, count))
        }
        _ => Err(LineCodecError::UnknownGenotypeBitmask(byte)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_and_decodes_hom00_run() {
        let byte = encode_run(Genotype::Hom00, 5).unwrap();
        assert_eq!(byte & 0x80, 0);
        assert_eq!(decode_byte(byte).unwrap(), RunToken::Run(Genotype::Hom00, 5));
    }

    #[test]
    fn encodes_and_decodes_all_genotype_runs() {
        for (gt, label) in [
            (Genotype::Het01, "0|1"),
            (Genotype::Het10, "1|0"),
            (Genotype::Hom11, "1|1"),
        ] {
            let byte = encode_run(gt, 7).unwrap();
            assert_eq!(decode_byte(byte).unwrap(), RunToken::Run(gt, 7));
            assert_eq!(gt.as_str(), label);
        }
    }

    #[test]
    fn uncompressed_marker_is_never_confused_with_hom11() {
        let uncompressed = encode_uncompressed(3).unwrap();
        assert_eq!(decode_byte(uncompressed).unwrap(), RunToken::Uncompressed(3));

        let hom11 = encode_run(Genotype::Hom11, 3).unwrap();
        assert_ne!(uncompressed, hom11);
        assert_eq!(decode_byte(hom11).unwrap(), RunToken::Run(Genotype::Hom11, 3));
    }

    #[test]
    fn rejects_zero_count() {
        assert!(encode_run(Genotype::Hom00, 0).is_err());
        assert!(encode_uncompressed(0).is_err());
    }

    #[test]
    fn rejects_run_overflow() {
        assert!(encode_run(Genotype::Hom00, 128).is_err());
        assert!(encode_run(Genotype::Het01, 32).is_err());
        assert!(encode_uncompressed(32).is_err());
    }

    #[test]
    fn saturates_at_maximum_run_lengths() {
        assert!(encode_run(Genotype::Hom00, SAMPLE_MAX_RUN_00).is_ok());
        assert!(encode_run(Genotype::Het10, SAMPLE_MAX_RUN_GENOTYPE).is_ok());
    }
}
