use thiserror::Error;

/// Runtime decode/encode failures. Every variant aborts the enclosing
/// `Wire` call immediately; recovery is left to the caller.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum WireError {
    #[error("unexpected end of input: need {needed} bytes, {remaining} remaining")]
    TruncatedInput { needed: usize, remaining: usize },

    #[error(
        "non-canonical varint {value:#x}: discriminant {discriminant:#x} must encode a value of at least {min:#x}"
    )]
    NonCanonicalEncoding {
        value: u64,
        discriminant: u8,
        min: u64,
    },

    #[error("value out of representable range: {0}")]
    RangeError(String),
}
