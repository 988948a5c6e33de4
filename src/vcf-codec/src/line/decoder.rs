//! Inverse of the encoder: streams one compressed record off a buffered byte source.

use std::io::BufRead;

use log::trace;

use crate::cache::DecodeCache;
use crate::constants::{LF, TAB, VCF_REQUIRED_COL_COUNT};
use crate::error::LineCodecError;
use crate::genotype::{decode_byte, RunToken};
use crate::length_header::decode_length_header;
use crate::schema::CompressionSchema;

fn io_err(e: std::io::Error) -> LineCodecError {
    if e.kind() == std::io::ErrorKind::UnexpectedEof {
        LineCodecError::UnexpectedEof
    } else {
        LineCodecError::Io(e)
    }
}

fn read_exact<R: BufRead>(reader: &mut R, buf: &mut [u8]) -> Result<(), LineCodecError> {
    reader.read_exact(buf).map_err(io_err)
}

fn read_byte<R: BufRead>(reader: &mut R) -> Result<u8, LineCodecError> {
    let mut b = [0u8; 1];
    read_exact(reader, &mut b)?;
    Ok(b[0])
}

/// Peek the next byte without consuming it, or `None` at end of stream.
fn peek_byte<R: BufRead>(reader: &mut R) -> Result<Option<u8>, LineCodecError> {
    let buf = reader.fill_buf().map_err(io_err)?;
    Ok(buf.first().copied())
}

/// Read one literal token: bytes up to (and consuming) the next TAB, or up to (without
/// consuming) the next LF, which belongs to the outer record framing.
///
/// Returns the token text and the number of bytes consumed from `reader`.
fn read_literal_token<R: BufRead>(reader: &mut R) -> Result<(String, usize), LineCodecError> {
    let mut buf = Vec::new();
    let mut consumed = 0usize;
    loop {
        match peek_byte(reader)? {
            None => return Err(LineCodecError::UnexpectedEof),
            Some(TAB) => {
                read_byte(reader)?;
                consumed += 1;
                break;
            }
            Some(LF) => break,
            Some(_) => {
                buf.push(read_byte(reader)?);
                consumed += 1;
            }
        }
    }
    let text = String::from_utf8(buf).map_err(|_| LineCodecError::UnknownGenotypeBitmask(0))?;
    Ok((text, consumed))
}

/// Decode exactly one compressed record from `reader`, appending the reconstructed text line
/// (including its terminating LF) to `out`.
///
/// Returns the number of bytes consumed from `reader`.
///
/// # Errors
/// Returns a [`LineCodecError`] on malformed framing, an unsupported length-header extension
/// count, a required-column count mismatch, an unrecognized sample bitmask, or I/O failure.
pub fn decode_data_line<R: BufRead>(
    reader: &mut R,
    schema: CompressionSchema,
    cache: &mut DecodeCache,
    out: &mut String,
) -> Result<usize, LineCodecError> {
    let mut consumed = 0usize;

    let mut line_len_bytes = [0u8; 4];
    read_exact(reader, &mut line_len_bytes)?;
    consumed += 4;
    let _line_length = decode_length_header(line_len_bytes)?;

    let mut required_len_bytes = [0u8; 4];
    read_exact(reader, &mut required_len_bytes)?;
    consumed += 4;
    let required_len = decode_length_header(required_len_bytes)? as usize;

    let mut required = vec![0u8; required_len];
    read_exact(reader, &mut required)?;
    consumed += required_len;

    let tab_count = required.iter().filter(|&&b| b == TAB).count();
    let sample_count = schema.sample_count();
    let with_format = VCF_REQUIRED_COL_COUNT + 1;
    let acceptable = tab_count == with_format
        || (sample_count == 0 && (tab_count == VCF_REQUIRED_COL_COUNT || tab_count + 1 == VCF_REQUIRED_COL_COUNT));
    if !acceptable {
        return Err(LineCodecError::RequiredColumnMismatch { expected: with_format, counted: tab_count });
    }

    let required_text = std::str::from_utf8(&required)
        .map_err(|_| LineCodecError::RequiredColumnMismatch { expected: with_format, counted: tab_count })?;
    out.push_str(required_text);

    let mut samples_text = String::new();
    let mut emitted = 0usize;
    while emitted < sample_count {
        let b = read_byte(reader)?;
        consumed += 1;
        match decode_byte(b)? {
            RunToken::Run(genotype, count) => {
                let count = count as usize;
                if emitted + count > sample_count {
                    return Err(LineCodecError::MissingSamples { expected: sample_count, received: emitted + count });
                }
                samples_text.push_str(cache.materialize(genotype, count as u8));
                emitted += count;
            }
            RunToken::Uncompressed(count) => {
                for _ in 0..count {
                    if emitted >= sample_count {
                        return Err(LineCodecError::MissingSamples { expected: sample_count, received: emitted + 1 });
                    }
                    let (token, token_bytes) = read_literal_token(reader)?;
                    consumed += token_bytes;
                    samples_text.push_str(&token);
                    samples_text.push(TAB as char);
                    emitted += 1;
                }
            }
        }
    }
    if samples_text.ends_with('\t') {
        samples_text.pop();
    }
    out.push_str(&samples_text);

    let terminator = read_byte(reader)?;
    consumed += 1;
    if terminator != LF {
        return Err(LineCodecError::MissingTrailingNewline);
    }
    out.push('\n');

    trace!("decoded record: {consumed} bytes, {emitted} samples, cache holds {} entries", cache.len());
    Ok(consumed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::line::encoder::encode_data_line;

    fn round_trip(line: &str, sample_count: usize) -> String {
        let schema = CompressionSchema::new(sample_count);
        let record = encode_data_line(line, schema).unwrap();
        let mut reader = std::io::BufReader::new(&record[..]);
        let mut cache = DecodeCache::new();
        let mut out = String::new();
        let consumed = decode_data_line(&mut reader, schema, &mut cache, &mut out).unwrap();
        assert_eq!(consumed, record.len());
        out
    }

    #[test]
    fn round_trips_single_variant_all_hom00() {
        let line = "1\t100\t.\tA\tT\t99\tPASS\t.\tGT\t0|0\t0|0\t0|0\t0|0\n";
        assert_eq!(round_trip(line, 4), line);
    }

    #[test]
    fn round_trips_mixed_genotypes_with_literal() {
        let line = "1\t100\t.\tA\tT\t99\tPASS\t.\tGT\t0|0\t0|0\t0|1\t1|0\t1|1\t1|2\n";
        assert_eq!(round_trip(line, 6), line);
    }

    #[test]
    fn round_trips_saturated_run() {
        let mut tokens = vec!["1", "100", ".", "A", "T", "99", "PASS", ".", "GT"];
        let samples = vec!["0|0"; 200];
        tokens.extend(samples.iter());
        let line = tokens.join("\t") + "\n";
        assert_eq!(round_trip(&line, 200), line);
    }

    #[test]
    fn round_trips_zero_samples() {
        let line = "1\t100\t.\tA\tT\t99\tPASS\t.\n";
        assert_eq!(round_trip(line, 0), line);
    }

    #[test]
    fn round_trips_literal_not_at_end() {
        let line = "1\t100\t.\tA\tT\t99\tPASS\t.\tGT\t1|2\t0|0\t0|0\n";
        assert_eq!(round_trip(line, 3), line);
    }

    #[test]
    fn rejects_extension_count_zero_on_line_header() {
        let mut bytes = vec![0x00, 0x00, 0x00, 0x00];
        bytes.extend_from_slice(&[0u8; 4]);
        let mut reader = std::io::BufReader::new(&bytes[..]);
        let mut cache = DecodeCache::new();
        let mut out = String::new();
        let err = decode_data_line(&mut reader, CompressionSchema::new(0), &mut cache, &mut out)
            .unwrap_err();
        assert!(matches!(err, LineCodecError::LengthHeader(_)));
    }
}
