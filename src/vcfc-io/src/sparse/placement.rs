//! The deterministic (reference, position) -> file offset placement function.

pub const DEFAULT_BLOCK_SIZE: u64 = 4096;
pub const DEFAULT_MULTIPLICATION_FACTOR: u64 = 4;
pub const DEFAULT_MAX_POSITION: u64 = 300_000_000;

/// Tunable parameters of the sparse placement function. Defaults match the compiled-in
/// constants a reader of a sparse file must also use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SparseLayout {
    pub block_size: u64,
    pub multiplication_factor: u64,
    pub max_position: u64,
}

impl SparseLayout {
    #[must_use]
    pub fn new(block_size: u64, multiplication_factor: u64, max_position: u64) -> Self {
        Self { block_size, multiplication_factor, max_position }
    }

    /// `offset(ref, pos) = block_size * id(ref) * max_position + pos * multiplication_factor * block_size`
    #[must_use]
    pub fn offset(&self, reference_id: u32, position: u64) -> u64 {
        self.block_size * u64::from(reference_id) * self.max_position
            + position * self.multiplication_factor * self.block_size
    }
}

impl Default for SparseLayout {
    fn default() -> Self {
        Self::new(DEFAULT_BLOCK_SIZE, DEFAULT_MULTIPLICATION_FACTOR, DEFAULT_MAX_POSITION)
    }
}
