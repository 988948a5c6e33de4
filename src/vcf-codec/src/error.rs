use thiserror::Error;

#[derive(Error, Debug)]
pub enum LengthHeaderError {
    #[error("length {0} exceeds the maximum representable value (2^30 - 1)")]
    LengthOverflow(u64),

    #[error("extension count {0} not implemented, must be 3")]
    UnsupportedExtensionCount(u8),
}

#[derive(Error, Debug)]
pub enum LineCodecError {
    #[error(transparent)]
    LengthHeader(#[from] LengthHeaderError),

    #[error("VCF data line did not contain at least 8 required columns")]
    TooFewColumns,

    #[error("run count {count} exceeds the maximum allowed for this genotype flag ({max})")]
    RunOverflow { count: usize, max: u8 },

    #[error("did not read all uncompressed columns: expected {expected} tabs, counted {counted}")]
    RequiredColumnMismatch { expected: usize, counted: usize },

    #[error("unrecognized sample bitmask 0x{0:02X}")]
    UnknownGenotypeBitmask(u8),

    #[error("missing samples: expected {expected}, received {received}")]
    MissingSamples { expected: usize, received: usize },

    #[error("sample line did not end in a newline")]
    MissingTrailingNewline,

    #[error("unexpected end of file while reading a compressed record")]
    UnexpectedEof,

    #[error("I/O error while decoding a compressed record")]
    Io(#[source] std::io::Error),
}

#[derive(Error, Debug)]
pub enum HeaderStateError {
    #[error("a metadata ('##') line may not follow a header ('#') line")]
    MetaAfterHeader,

    #[error("the header ('#') line was already seen; it may not repeat")]
    HeaderAfterHeader,

    #[error("a variant line may only follow the header line")]
    VariantBeforeHeader,

    #[error("file ended before a header or metadata line was read")]
    MissingHeader,
}
