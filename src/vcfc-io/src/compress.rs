//! Streams a whole VCF through the line encoder, copying metadata and header lines verbatim.

use std::io::{BufRead, Write};

use log::{debug, trace};
use vcf_codec::{encode_data_line, CompressionSchema};

use crate::error::IoEngineError;

/// Compress `reader`'s text VCF content into `writer`'s binary stream.
///
/// # Errors
/// Returns [`IoEngineError`] on I/O failure or if a data line cannot be encoded (too few
/// columns, a run or length header that does not fit its field).
pub fn compress<R: BufRead, W: Write>(reader: &mut R, writer: &mut W) -> Result<(), IoEngineError> {
    let mut schema = CompressionSchema::new(0);
    let mut line = String::new();
    let mut variants_written = 0usize;

    loop {
        line.clear();
        let bytes_read = reader.read_line(&mut line)?;
        if bytes_read == 0 {
            break;
        }
        if line.trim_end_matches(['\n', '\r']).is_empty() {
            continue;
        }
        if line.starts_with("##") {
            writer.write_all(line.as_bytes())?;
        } else if line.starts_with('#') {
            schema = CompressionSchema::from_header_line(&line);
            writer.write_all(line.as_bytes())?;
        } else {
            let record = encode_data_line(&line, schema)?;
            writer.write_all(&record)?;
            variants_written += 1;
            trace!("encoded variant line {variants_written} ({} bytes)", record.len());
        }
    }
    debug!("compressed {variants_written} variant lines");
    Ok(())
}
