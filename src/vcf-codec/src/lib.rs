//! Binary framing, length-header and bit-packed genotype codec for compressed VCF records.
//!
//! This crate owns the three leaf components of the compression pipeline: the length-header
//! word, the run-length/bit-packed genotype layout, and the line-level encoder/decoder built on
//! top of them. File-level streaming (header pass-through, sparse layout) lives in `vcfc-io`.

pub mod cache;
pub mod constants;
pub mod error;
pub mod genotype;
pub mod length_header;
pub mod line;
pub mod reference_map;
pub mod schema;

pub use cache::DecodeCache;
pub use error::{HeaderStateError, LengthHeaderError, LineCodecError};
pub use genotype::{Genotype, RunToken};
pub use length_header::{decode_length_header, encode_length_header};
pub use line::{decode_data_line, encode_data_line};
pub use reference_map::reference_id;
pub use schema::CompressionSchema;
