use alloc::string::String;
use enough::StopReason;

/// Errors from BMP decoding, encoding, and grid construction.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum BmpError {
    #[error("unexpected end of input")]
    UnexpectedEof,

    #[error("invalid header: {0}")]
    InvalidHeader(String),

    #[error("file size field ({declared}) doesn't match computed layout ({computed})")]
    SizeMismatch { declared: u32, computed: u64 },

    #[error("unsupported format variant: {0}")]
    UnsupportedVariant(String),

    #[error("dimensions too large: {width}x{height}")]
    DimensionsTooLarge { width: u32, height: u32 },

    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    #[error("image has zero width or height")]
    EmptyImage,

    #[error("pixel buffer size mismatch: need {needed} pixels, got {actual}")]
    BufferSizeMismatch { needed: usize, actual: usize },

    #[error("operation cancelled")]
    Cancelled(StopReason),

    /// Input source could not be opened or read.
    #[cfg(feature = "std")]
    #[error("cannot read source: {0}")]
    SourceIo(std::io::Error),

    /// Output sink could not be opened or written.
    #[cfg(feature = "std")]
    #[error("cannot write sink: {0}")]
    SinkIo(std::io::Error),
}

impl From<StopReason> for BmpError {
    fn from(r: StopReason) -> Self {
        BmpError::Cancelled(r)
    }
}
