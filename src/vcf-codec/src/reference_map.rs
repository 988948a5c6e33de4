//! Maps a VCF `CHROM` field to the small integer id used by the sparse placement function.
//!
//! Chromosomes `"1".."22"` map to `1..22`, `"X"` to `23`, `"Y"` to `24`, and `"M"` to `25`. Any
//! other value is out of range for the sparse layout; callers that do not need sparse placement
//! never consult this map at all.

/// Resolve a `CHROM` field to its sparse-layout reference id, or `None` if unrecognized.
#[must_use]
pub fn reference_id(chrom: &str) -> Option<u32> {
    if let Ok(autosome) = chrom.parse::<u32>() {
        return (1..=22).contains(&autosome).then_some(autosome);
    }
    match chrom {
        "X" => Some(23),
        "Y" => Some(24),
        "M" => Some(25),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_autosomes() {
        assert_eq!(reference_id("1"), Some(1));
        assert_eq!(reference_id("22"), Some(22));
    }

    #[test]
    fn maps_sex_and_mito() {
        assert_eq!(reference_id("X"), Some(23));
        assert_eq!(reference_id("Y"), Some(24));
        assert_eq!(reference_id("M"), Some(25));
    }

    #[test]
    fn rejects_out_of_range_and_unknown() {
        assert_eq!(reference_id("0"), None);
        assert_eq!(reference_id("23"), None);
        assert_eq!(reference_id("MT"), None);
        assert_eq!(reference_id("chr1"), None);
    }
}
