use thiserror::Error;

/// Reasons a byte buffer could not be decoded. Offsets are relative to the start of the buffer
/// handed to the [crate::Decoder].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CborError {
    /// The buffer ended in the middle of a header or a fixed width argument.
    #[error("unexpected end of input at offset {0}")]
    UnexpectedEof(usize),

    /// A length argument claims more bytes than remain in the buffer.
    #[error("length {len} at offset {offset} exceeds the {remaining} remaining bytes")]
    LengthOutOfBounds {
        /// Offset of the length-prefixed item.
        offset: usize,
        /// The claimed length.
        len: u64,
        /// Bytes left in the buffer.
        remaining: usize,
    },

    /// Additional information values 28, 29 and 30 are reserved.
    #[error("reserved additional information {info} at offset {offset}")]
    ReservedAdditionalInfo {
        /// Offset of the header byte.
        offset: usize,
        /// The low five bits of the header.
        info: u8,
    },

    /// Integers and tags have no indefinite length form.
    #[error("major type {major} at offset {offset} can not have an indefinite length")]
    UnexpectedIndefiniteLength {
        /// Offset of the header byte.
        offset: usize,
        /// The major type of the header.
        major: u8,
    },

    /// A two byte simple value encoding of a value below 32.
    #[error("unsupported simple value {value} at offset {offset}")]
    UnsupportedSimpleValue {
        /// Offset of the header byte.
        offset: usize,
        /// The simple value code.
        value: u8,
    },

    /// The break marker appeared where a data item was required.
    #[error("break marker outside of an indefinite length item at offset {0}")]
    UnexpectedBreak(usize),

    /// An indefinite length string contained something other than a definite length string of
    /// the same major type.
    #[error("invalid chunk in an indefinite length string at offset {0}")]
    InvalidStringChunk(usize),

    /// A text string was not valid UTF-8.
    #[error("text string at offset {0} is not valid utf-8")]
    InvalidUtf8(usize),

    /// Arrays, maps and tags nested deeper than the decoder allows.
    #[error("nesting depth exceeds {0}")]
    DepthLimitExceeded(usize),

    /// A map repeated a key. Lookups would otherwise depend on entry order.
    #[error("duplicate map key at offset {0}")]
    DuplicateMapKey(usize),

    /// Bytes remained after the single top level data item.
    #[error("{0} trailing bytes after the data item")]
    TrailingData(usize),
}
