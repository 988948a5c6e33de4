//! The sparse random-access layout: a deterministic placement function, a writer that relocates
//! records from a plain compressed file, and a query-only reader.

mod placement;
mod reader;
mod writer;

pub use placement::{SparseLayout, DEFAULT_BLOCK_SIZE, DEFAULT_MAX_POSITION, DEFAULT_MULTIPLICATION_FACTOR};
pub use reader::{next_slot, prev_slot, read_at, read_first_skip, read_skip_chain, SkipChain};
pub use writer::sparsify;
