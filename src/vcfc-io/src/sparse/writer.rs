//! Relocates each compressed record into its placement-function slot and maintains the
//! doubly-linked on-disk skip chain.

use std::io::{BufRead, Seek, SeekFrom, Write};

use vcf_codec::decode_length_header;

use crate::error::IoEngineError;
use crate::header_state::HeaderState;
use crate::sparse::placement::SparseLayout;

fn parse_reference_and_position(required: &[u8]) -> Result<(String, u64), IoEngineError> {
    let text = std::str::from_utf8(required).map_err(|_| IoEngineError::MalformedRecord)?;
    let mut columns = text.split('\t');
    let reference = columns.next().ok_or(IoEngineError::MalformedRecord)?;
    let position: u64 = columns
        .next()
        .ok_or(IoEngineError::MalformedRecord)?
        .parse()
        .map_err(|_| IoEngineError::MalformedRecord)?;
    Ok((reference.to_string(), position))
}

/// Read a compressed file from `reader` and write its sparse-layout equivalent to `writer`.
///
/// `writer` must support random access: every record after the first requires seeking back to
/// patch the previous record's `dist_to_next` field.
///
/// # Errors
/// Returns [`IoEngineError`] on I/O failure, an unrecognized reference name, or a slot collision
/// (two records placed at or before the same offset, which implies unsorted input).
pub fn sparsify<R: BufRead, W: Write + Seek>(
    reader: &mut R,
    writer: &mut W,
    layout: SparseLayout,
) -> Result<(), IoEngineError> {
    let mut state = HeaderState::new();
    let mut line = String::new();
    loop {
        let starts_with_hash = matches!(reader.fill_buf()?.first(), Some(b'#'));
        if !starts_with_hash {
            break;
        }
        line.clear();
        if reader.read_line(&mut line)? == 0 {
            break;
        }
        state = if line.starts_with("##") { state.to_meta()? } else { state.to_header()? };
        writer.write_all(line.as_bytes())?;
    }

    writer.write_all(&[0u8; 8])?;
    let data_start = writer.stream_position()?;

    let mut prev_slot: Option<u64> = None;

    loop {
        if reader.fill_buf()?.is_empty() {
            break;
        }
        state = state.to_variant()?;

        let mut line_len_bytes = [0u8; 4];
        reader.read_exact(&mut line_len_bytes)?;
        let line_length = decode_length_header(line_len_bytes)? as usize;
        let mut rest = vec![0u8; line_length];
        reader.read_exact(&mut rest)?;

        let required_len_bytes: [u8; 4] = rest[0..4].try_into().expect("4-byte slice");
        let required_len = decode_length_header(required_len_bytes)? as usize;
        let (reference, position) = parse_reference_and_position(&rest[4..4 + required_len])?;

        let reference_id = vcf_codec::reference_id(&reference)
            .ok_or_else(|| IoEngineError::UnknownReference(reference.clone()))?;
        let slot = layout.offset(reference_id, position) + data_start;

        if let Some(prev) = prev_slot {
            if slot <= prev {
                return Err(IoEngineError::SlotCollision { reference, position, offset: slot });
            }
        }

        let dist_to_prev = match prev_slot {
            Some(prev) => slot - prev,
            None => slot - data_start,
        };

        if let Some(prev) = prev_slot {
            let cursor = writer.stream_position()?;
            writer.seek(SeekFrom::Start(prev + 8))?;
            writer.write_all(&dist_to_prev.to_le_bytes())?;
            writer.seek(SeekFrom::Start(cursor))?;
        } else {
            let cursor = writer.stream_position()?;
            writer.seek(SeekFrom::Start(data_start - 8))?;
            writer.write_all(&dist_to_prev.to_le_bytes())?;
            writer.seek(SeekFrom::Start(cursor))?;
        }

        writer.seek(SeekFrom::Start(slot))?;
        writer.write_all(&dist_to_prev.to_le_bytes())?;
        writer.write_all(&0u64.to_le_bytes())?;
        writer.write_all(&line_len_bytes)?;
        writer.write_all(&rest)?;

        prev_slot = Some(slot);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compress::compress;
    use std::io::{BufReader, Cursor};

    /// A layout with deliberately tiny constants so tests can hold a sparse file in a `Vec<u8>`.
    /// The placement function's shape is identical to the compiled-in defaults; only the scale
    /// differs, so it still exercises strict monotonicity and the skip-chain math.
    fn test_layout() -> SparseLayout {
        SparseLayout::new(16, 2, 1_000)
    }

    #[test]
    fn placement_bijection_and_first_skip_on_sorted_input() {
        let input = "##fileformat=VCFv4.2\n#CHROM\tPOS\tID\tREF\tALT\tQUAL\tFILTER\tINFO\tFORMAT\tNA001\n1\t100\t.\tA\tT\t99\tPASS\t.\tGT\t0|0\n1\t200\t.\tA\tT\t99\tPASS\t.\tGT\t0|1\n";
        let mut reader = BufReader::new(input.as_bytes());
        let mut compressed = Vec::new();
        compress(&mut reader, &mut compressed).unwrap();

        let mut compressed_reader = BufReader::new(&compressed[..]);
        let mut sparse = Cursor::new(Vec::new());
        sparsify(&mut compressed_reader, &mut sparse, test_layout()).unwrap();

        let bytes = sparse.into_inner();
        let prefix_len = "##fileformat=VCFv4.2\n#CHROM\tPOS\tID\tREF\tALT\tQUAL\tFILTER\tINFO\tFORMAT\tNA001\n".len();
        let data_start = (prefix_len + 8) as u64;
        let first_skip = u64::from_le_bytes(bytes[prefix_len..prefix_len + 8].try_into().unwrap());

        let layout = test_layout();
        let slot1 = layout.offset(1, 100) + data_start;
        let slot2 = layout.offset(1, 200) + data_start;
        assert_eq!(first_skip, slot1 - data_start);
        assert!(slot2 > slot1);

        let dist_to_next_1 = u64::from_le_bytes(bytes[(slot1 + 8) as usize..(slot1 + 16) as usize].try_into().unwrap());
        assert_eq!(dist_to_next_1, slot2 - slot1);

        let dist_to_next_2 = u64::from_le_bytes(bytes[(slot2 + 8) as usize..(slot2 + 16) as usize].try_into().unwrap());
        assert_eq!(dist_to_next_2, 0);
    }

    #[test]
    fn rejects_unsorted_input_as_a_slot_collision() {
        let input = "##fileformat=VCFv4.2\n#CHROM\tPOS\tID\tREF\tALT\tQUAL\tFILTER\tINFO\tFORMAT\tNA001\n1\t200\t.\tA\tT\t99\tPASS\t.\tGT\t0|0\n1\t100\t.\tA\tT\t99\tPASS\t.\tGT\t0|1\n";
        let mut reader = BufReader::new(input.as_bytes());
        let mut compressed = Vec::new();
        compress(&mut reader, &mut compressed).unwrap();

        let mut compressed_reader = BufReader::new(&compressed[..]);
        let mut sparse = Cursor::new(Vec::new());
        assert!(sparsify(&mut compressed_reader, &mut sparse, test_layout()).is_err());
    }
}
