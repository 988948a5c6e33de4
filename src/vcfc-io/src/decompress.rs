//! Streams a compressed file back into text VCF, validating the header/metadata prefix with an
//! explicit typestate instead of ad-hoc booleans.

use std::io::{BufRead, Write};

use log::debug;
use vcf_codec::{decode_data_line, CompressionSchema, DecodeCache, HeaderStateError};

use crate::error::IoEngineError;
use crate::header_state::HeaderState;

/// Decompress `reader`'s binary stream into `writer`'s text VCF content.
///
/// # Errors
/// Returns [`IoEngineError`] on I/O failure, an invalid metadata/header ordering, or a malformed
/// compressed record.
pub fn decompress<R: BufRead, W: Write>(reader: &mut R, writer: &mut W) -> Result<(), IoEngineError> {
    let mut state = HeaderState::new();
    let mut schema = CompressionSchema::new(0);
    let mut line = String::new();

    loop {
        let starts_with_hash = matches!(reader.fill_buf()?.first(), Some(b'#'));
        if !starts_with_hash {
            break;
        }
        line.clear();
        let bytes_read = reader.read_line(&mut line)?;
        if bytes_read == 0 {
            break;
        }
        if line.starts_with("##") {
            state = state.to_meta()?;
        } else {
            state = state.to_header()?;
            schema = CompressionSchema::from_header_line(&line);
        }
        writer.write_all(line.as_bytes())?;
    }

    if matches!(state, HeaderState::Uninitialized | HeaderState::Meta) {
        return Err(HeaderStateError::MissingHeader.into());
    }

    let mut cache = DecodeCache::new();
    let mut text = String::new();
    let mut variants_read = 0usize;
    loop {
        if reader.fill_buf()?.is_empty() {
            break;
        }
        state = state.to_variant()?;
        text.clear();
        decode_data_line(reader, schema, &mut cache, &mut text)?;
        writer.write_all(text.as_bytes())?;
        variants_read += 1;
    }
    debug!("decompressed {variants_read} variant lines, cache holds {} entries", cache.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compress::compress;
    use std::io::BufReader;

    #[test]
    fn round_trips_a_small_file() {
        let input = "##fileformat=VCFv4.2\n#CHROM\tPOS\tID\tREF\tALT\tQUAL\tFILTER\tINFO\tFORMAT\tNA001\tNA002\n1\t100\t.\tA\tT\t99\tPASS\t.\tGT\t0|0\t0|1\n2\t200\t.\tC\tG\t50\tPASS\t.\tGT\t1|1\t1|2\n";
        let mut reader = BufReader::new(input.as_bytes());
        let mut compressed = Vec::new();
        compress(&mut reader, &mut compressed).unwrap();

        let mut compressed_reader = BufReader::new(&compressed[..]);
        let mut decompressed = Vec::new();
        decompress(&mut compressed_reader, &mut decompressed).unwrap();

        assert_eq!(String::from_utf8(decompressed).unwrap(), input);
    }

    #[test]
    fn rejects_missing_header() {
        let input = "##fileformat=VCFv4.2\n";
        let mut reader = BufReader::new(input.as_bytes());
        let mut out = Vec::new();
        assert!(decompress(&mut reader, &mut out).is_err());
    }

    #[test]
    fn rejects_metadata_only_file_with_no_header_line() {
        let input = "##fileformat=VCFv4.2\n##contig=<ID=1,length=249250621>\n";
        let mut reader = BufReader::new(input.as_bytes());
        let mut out = Vec::new();
        assert!(decompress(&mut reader, &mut out).is_err());
    }

    #[test]
    fn rejects_header_after_header() {
        let input = "##m\n#CHROM\tPOS\tID\tREF\tALT\tQUAL\tFILTER\tINFO\tFORMAT\n#CHROM\tPOS\tID\tREF\tALT\tQUAL\tFILTER\tINFO\tFORMAT\n";
        let mut reader = BufReader::new(input.as_bytes());
        let mut out = Vec::new();
        assert!(decompress(&mut reader, &mut out).is_err());
    }
}
