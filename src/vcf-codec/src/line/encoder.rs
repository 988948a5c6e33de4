//! Turns one VCF data line into a framed binary record.

use crate::constants::{LF, TAB, VCF_REQUIRED_COL_COUNT};
use crate::error::{LengthHeaderError, LineCodecError};
use crate::genotype::{encode_run, encode_uncompressed, Genotype};
use crate::length_header::encode_length_header;
use crate::schema::CompressionSchema;

/// Encode a single text VCF data line (with or without a trailing LF) into one compressed
/// record, per the binary layout in the data model.
///
/// # Errors
/// Returns [`LineCodecError::TooFewColumns`] if the line has fewer than the mandatory 8 columns,
/// or a codec error if a run or length header cannot be represented.
pub fn encode_data_line(line: &str, schema: CompressionSchema) -> Result<Vec<u8>, LineCodecError> {
    let _ = schema; // the line's own column count is authoritative; schema is validated by the caller.
    let line = line.strip_suffix('\n').unwrap_or(line);
    let tokens: Vec<&str> = line.split('\t').collect();
    if tokens.len() < VCF_REQUIRED_COL_COUNT {
        return Err(LineCodecError::TooFewColumns);
    }

    let mut out = vec![0u8; 8];
    let required_start = out.len();
    out.extend_from_slice(tokens[..VCF_REQUIRED_COL_COUNT].join("\t").as_bytes());

    let samples: &[&str] = if tokens.len() > VCF_REQUIRED_COL_COUNT {
        out.push(TAB);
        out.extend_from_slice(tokens[VCF_REQUIRED_COL_COUNT].as_bytes());
        let sample_tokens = &tokens[VCF_REQUIRED_COL_COUNT + 1..];
        if !sample_tokens.is_empty() {
            out.push(TAB);
        }
        sample_tokens
    } else {
        &[]
    };

    let required_len = to_u32_length(out.len() - required_start)?;
    out[4..8].copy_from_slice(&encode_length_header(required_len)?);

    encode_samples(&mut out, samples)?;

    out.push(LF);

    let line_length = to_u32_length(out.len() - 4)?;
    out[0..4].copy_from_slice(&encode_length_header(line_length)?);

    Ok(out)
}

fn to_u32_length(len: usize) -> Result<u32, LineCodecError> {
    u32::try_from(len)
        .map_err(|_| LineCodecError::LengthHeader(LengthHeaderError::LengthOverflow(len as u64)))
}

/// Encode the sample columns into the bit-packed run/literal byte sequence.
///
/// Run-flag bytes are self-delimiting and sit back-to-back with no separator. A literal token's
/// text is the only thing that needs a TAB terminator, and only when more samples follow it.
/// Each maximal run of an identical compressible token is split into as many max-size chunks as
/// needed; every other token is emitted as a single-count literal (runs of literals are never
/// combined, see the design notes on duplicate-token handling).
fn encode_samples(out: &mut Vec<u8>, samples: &[&str]) -> Result<(), LineCodecError> {
    let mut i = 0;
    while i < samples.len() {
        let token = samples[i];
        if let Some(genotype) = Genotype::from_token(token) {
            let mut run_len = 1usize;
            while i + run_len < samples.len() && samples[i + run_len] == token {
                run_len += 1;
            }
            let max = genotype.max_run() as usize;
            let mut remaining = run_len;
            while remaining > 0 {
                let chunk = remaining.min(max);
                out.push(encode_run(genotype, chunk as u8)?);
                remaining -= chunk;
            }
            i += run_len;
        } else {
            out.push(encode_uncompressed(1)?);
            out.extend_from_slice(token.as_bytes());
            i += 1;
            if i < samples.len() {
                out.push(TAB);
            }
        }
    }
    Ok(())
}
