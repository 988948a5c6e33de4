//! Query-only access to a sparse file: direct slot lookup, plus skip-chain walking to the
//! nearest occupied neighbor when a candidate slot is unoccupied.

use std::io::{BufRead, Read, Seek, SeekFrom};

use vcf_codec::{decode_data_line, reference_id, CompressionSchema, DecodeCache};

use crate::error::IoEngineError;
use crate::sparse::placement::SparseLayout;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkipChain {
    pub dist_to_prev: u64,
    pub dist_to_next: u64,
}

/// Read the `first_skip` field located at `data_start - 8`.
///
/// # Errors
/// Returns [`IoEngineError::Io`] if the field cannot be read.
pub fn read_first_skip<R: Read + Seek>(reader: &mut R, data_start: u64) -> Result<u64, IoEngineError> {
    reader.seek(SeekFrom::Start(data_start - 8))?;
    let mut buf = [0u8; 8];
    reader.read_exact(&mut buf)?;
    Ok(u64::from_le_bytes(buf))
}

/// Read the 16-byte skip-chain prefix at `slot`.
///
/// # Errors
/// Returns [`IoEngineError::Io`] if the field cannot be read (e.g. `slot` is past the end of the
/// file or lands on an unoccupied hole shorter than 16 bytes).
pub fn read_skip_chain<R: Read + Seek>(reader: &mut R, slot: u64) -> Result<SkipChain, IoEngineError> {
    reader.seek(SeekFrom::Start(slot))?;
    let mut buf = [0u8; 16];
    reader.read_exact(&mut buf)?;
    Ok(SkipChain {
        dist_to_prev: u64::from_le_bytes(buf[0..8].try_into().expect("8-byte slice")),
        dist_to_next: u64::from_le_bytes(buf[8..16].try_into().expect("8-byte slice")),
    })
}

/// The slot address of the next occupied record in the chain, or `None` at the end of chain.
///
/// # Errors
/// Returns [`IoEngineError::Io`] if `slot`'s skip-chain prefix cannot be read.
pub fn next_slot<R: Read + Seek>(reader: &mut R, slot: u64) -> Result<Option<u64>, IoEngineError> {
    let chain = read_skip_chain(reader, slot)?;
    Ok((chain.dist_to_next != 0).then(|| slot + chain.dist_to_next))
}

/// The slot address of the previous occupied record in the chain, or `None` if `slot` is the
/// first occupied record.
///
/// # Errors
/// Returns [`IoEngineError::Io`] if `slot`'s skip-chain prefix cannot be read.
pub fn prev_slot<R: Read + Seek>(reader: &mut R, slot: u64, data_start: u64) -> Result<Option<u64>, IoEngineError> {
    let chain = read_skip_chain(reader, slot)?;
    let candidate = slot - chain.dist_to_prev;
    Ok((candidate != data_start).then_some(candidate))
}

/// Look up `(reference, position)` directly via the placement function.
///
/// Returns `Ok(None)` if the candidate slot is unoccupied: either the read runs past the end of
/// the file, or the length-header word found there does not carry extension count 3 (a
/// placement collision gap reads as stray zero bytes, not a malformed record).
///
/// # Errors
/// Returns [`IoEngineError::UnknownReference`] if `reference` is not a recognized chromosome
/// name, or a codec/I/O error while decoding an occupied record.
pub fn read_at<R: BufRead + Seek>(
    reader: &mut R,
    layout: SparseLayout,
    schema: CompressionSchema,
    cache: &mut DecodeCache,
    reference: &str,
    position: u64,
    data_start: u64,
) -> Result<Option<String>, IoEngineError> {
    let reference_id =
        reference_id(reference).ok_or_else(|| IoEngineError::UnknownReference(reference.to_string()))?;
    let slot = layout.offset(reference_id, position) + data_start;

    if reader.seek(SeekFrom::Start(slot)).is_err() {
        return Ok(None);
    }
    let mut skip_chain = [0u8; 16];
    if reader.read_exact(&mut skip_chain).is_err() {
        return Ok(None);
    }
    let mut line_len_bytes = [0u8; 4];
    if reader.read_exact(&mut line_len_bytes).is_err() {
        return Ok(None);
    }
    if (line_len_bytes[0] >> 6) != 3 {
        return Ok(None);
    }
    reader.seek(SeekFrom::Current(-4))?;

    let mut text = String::new();
    decode_data_line(reader, schema, cache, &mut text)?;
    Ok(Some(text))
}
