//! Bit masks, flag values and VCF structural constants shared by the encoder and decoder.
//!
//! All uncompressed VCF input bytes are ASCII, so every leading bit is zero: the high bit of a
//! sample byte doubles as a flag distinguishing a "0|0" run from every other case.

/// Number of mandatory tab-separated columns preceding `FORMAT`/samples in a VCF data line.
pub const VCF_REQUIRED_COL_COUNT: usize = 8;

/// If the high bit is clear, the byte is a "0|0" run: low 7 bits carry the count.
pub const SAMPLE_MASK_00: u8 = 0b1000_0000;
pub const SAMPLE_MASKED_00: u8 = 0b0000_0000;
pub const SAMPLE_MAX_RUN_00: u8 = 0x7F;

/// If the high bit is set, the top 3 bits select among "0|1" / "1|0" / "1|1" / uncompressed.
pub const SAMPLE_MASK_GENOTYPE: u8 = 0b1110_0000;
pub const SAMPLE_MASKED_01: u8 = 0b1010_0000;
pub const SAMPLE_MASKED_10: u8 = 0b1100_0000;
pub const SAMPLE_MASKED_11: u8 = 0b1000_0000;
pub const SAMPLE_MASKED_UNCOMPRESSED: u8 = 0b1110_0000;
pub const SAMPLE_MAX_RUN_GENOTYPE: u8 = 0x1F;

pub const GT_00: &str = "0|0";
pub const GT_01: &str = "0|1";
pub const GT_10: &str = "1|0";
pub const GT_11: &str = "1|1";

pub const TAB: u8 = b'\t';
pub const LF: u8 = b'\n';
