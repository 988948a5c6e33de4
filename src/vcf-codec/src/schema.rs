//! The compression schema shared between the encoder and the decoder: the only piece of
//! per-file state that survives across data lines.

/// Number of samples in every data line of a given VCF file.
///
/// Derived once, from the `#CHROM` header line, as `columns - 9` (the nine mandatory columns
/// `CHROM POS ID REF ALT QUAL FILTER INFO FORMAT` precede the sample columns).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompressionSchema {
    sample_count: usize,
}

impl CompressionSchema {
    #[must_use]
    pub fn new(sample_count: usize) -> Self {
        Self { sample_count }
    }

    /// Derive a schema from the tab-delimited `#CHROM` header line.
    ///
    /// The sample count is `columns - 9`; a header with fewer than 9 columns yields zero
    /// samples rather than underflowing.
    #[must_use]
    pub fn from_header_line(header_line: &str) -> Self {
        let columns = header_line.trim_end_matches(['\n', '\r']).split('\t').count();
        Self::new(columns.saturating_sub(9))
    }

    #[must_use]
    pub fn sample_count(self) -> usize {
        self.sample_count
    }
}
