//! The compressed-record codec: one VCF data line in, one binary record out, and back.

mod decoder;
mod encoder;

pub use decoder::decode_data_line;
pub use encoder::encode_data_line;
