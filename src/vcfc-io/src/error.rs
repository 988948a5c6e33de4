use thiserror::Error;

use vcf_codec::{HeaderStateError, LengthHeaderError, LineCodecError};

#[derive(Error, Debug)]
pub enum IoEngineError {
    #[error(transparent)]
    LineCodec(#[from] LineCodecError),

    #[error(transparent)]
    HeaderState(#[from] HeaderStateError),

    #[error(transparent)]
    LengthHeader(#[from] LengthHeaderError),

    #[error("unrecognized reference name '{0}', cannot place it in the sparse layout")]
    UnknownReference(String),

    #[error("sparse slot collision: record at ({reference}, {position}) maps to offset {offset}, which is not past the previous record's slot")]
    SlotCollision { reference: String, position: u64, offset: u64 },

    #[error("malformed required-columns section while computing sparse placement")]
    MalformedRecord,

    #[error("input and output paths must differ: '{0}'")]
    InputEqualsOutput(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
