//! The file-level streaming engine: header/metadata pass-through, per-line framing via
//! `vcf-codec`, and the sparse random-access layout built on top of a plain compressed file.

pub mod compress;
pub mod decompress;
pub mod error;
pub mod header_state;
pub mod sparse;

pub use compress::compress;
pub use decompress::decompress;
pub use error::IoEngineError;
pub use header_state::HeaderState;
