//! Error types for snmp-codec.
//!
//! This module provides the error handling for every codec operation:
//!
//! - [`Error`] - The main error type for all library operations
//! - [`DecodeErrorKind`] - What went wrong while turning bytes into values
//! - [`EncodeErrorKind`] - What went wrong while turning values into bytes
//! - [`OidErrorKind`] - OID parsing and validation failures
//!
//! All errors are recoverable: a failure aborts only the decode or encode call
//! that produced it. Sibling fields in the same message can still be decoded.
//!
//! # Example
//!
//! ```
//! use snmp_codec::{DecodeErrorKind, Error, decode_value};
//!
//! // IpAddress tag with only two address octets
//! match decode_value(&[0x40, 0x04, 0xC0, 0xA8]) {
//!     Err(Error::Decode { kind: DecodeErrorKind::TruncatedIpAddress { available }, .. }) => {
//!         assert_eq!(available, 4);
//!     }
//!     other => panic!("unexpected result: {:?}", other),
//! }
//! ```

/// Result type alias using the library's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// BER decode error kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum DecodeErrorKind {
    /// Data truncated unexpectedly.
    TruncatedData,
    /// Declared length runs past the end of the buffer.
    InsufficientData { needed: usize, available: usize },
    /// Indefinite length (0x80) not supported.
    IndefiniteLength,
    /// Length field uses more octets than we accept.
    LengthTooLong { octets: usize },
    /// Integer encoding wider than 8 bytes.
    IntegerTooLarge { length: usize },
    /// Value does not fit the requested integer width.
    IntegerOverflow,
    /// Base-128 integer ended before its terminating octet.
    TruncatedBase128,
    /// Zero-length OBJECT IDENTIFIER.
    EmptyOid,
    /// OID has more arcs than RFC 2578 allows.
    OidTooLong { count: usize, max: usize },
    /// Zero-length BIT STRING.
    EmptyBitString,
    /// BIT STRING padding count out of range or padding bits set.
    InvalidPadding { padding: u8 },
    /// IpAddress TLV shorter than tag + length + 4 octets.
    TruncatedIpAddress { available: usize },
    /// IpAddress length octet is not 4.
    InvalidIpAddressLength { length: usize },
    /// Tag not handled by the typed value decoder.
    UnsupportedType(u8),
    /// Tag not handled by the raw field parser.
    UnknownFieldType(u8),
}

impl std::fmt::Display for DecodeErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TruncatedData => write!(f, "unexpected end of data"),
            Self::InsufficientData { needed, available } => {
                write!(f, "need {} bytes but only {} available", needed, available)
            }
            Self::IndefiniteLength => write!(f, "indefinite length encoding not supported"),
            Self::LengthTooLong { octets } => {
                write!(f, "length encoding too long ({} octets)", octets)
            }
            Self::IntegerTooLarge { length } => {
                write!(f, "integer too large: {} bytes", length)
            }
            Self::IntegerOverflow => write!(f, "integer overflow"),
            Self::TruncatedBase128 => write!(f, "truncated base 128 integer"),
            Self::EmptyOid => write!(f, "zero length OBJECT IDENTIFIER"),
            Self::OidTooLong { count, max } => {
                write!(f, "OID has {} arcs, exceeds maximum {}", count, max)
            }
            Self::EmptyBitString => write!(f, "zero length BIT STRING"),
            Self::InvalidPadding { padding } => {
                write!(f, "invalid padding bits in BIT STRING (padding {})", padding)
            }
            Self::TruncatedIpAddress { available } => {
                write!(f, "not enough data for IpAddress: {} bytes", available)
            }
            Self::InvalidIpAddressLength { length } => {
                write!(f, "IpAddress must be 4 bytes, got {}", length)
            }
            Self::UnsupportedType(tag) => {
                write!(f, "unable to decode type 0x{:02x}: not implemented", tag)
            }
            Self::UnknownFieldType(tag) => write!(f, "unknown field type: 0x{:02x}", tag),
        }
    }
}

/// BER encode error kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum EncodeErrorKind {
    /// Length must not be negative.
    NegativeLength(i64),
}

impl std::fmt::Display for EncodeErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NegativeLength(len) => {
                write!(f, "length must not be negative, got {}", len)
            }
        }
    }
}

/// OID validation error kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum OidErrorKind {
    /// Arc is not a non-negative decimal number.
    InvalidArc,
    /// OID too short (minimum 2 arcs).
    TooShort,
    /// First arc too large to encode (maximum 6).
    InvalidFirstArc(u32),
    /// Second arc must be below 40.
    InvalidSecondArc { first: u32, second: u32 },
    /// First two arcs do not fit in the single root octet.
    RootOverflow { first: u32, second: u32 },
}

impl std::fmt::Display for OidErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidArc => write!(f, "invalid arc value"),
            Self::TooShort => write!(f, "OID must have at least 2 arcs"),
            Self::InvalidFirstArc(v) => write!(f, "first arc must be at most 6, got {}", v),
            Self::InvalidSecondArc { first, second } => {
                write!(f, "second arc {} too large for first arc {}", second, first)
            }
            Self::RootOverflow { first, second } => {
                write!(f, "arcs {}.{} do not fit in one root octet", first, second)
            }
        }
    }
}

/// The main error type for all snmp-codec operations.
///
/// # Common Patterns
///
/// ```
/// use snmp_codec::{DecodeErrorKind, Error};
///
/// fn is_truncation(error: &Error) -> bool {
///     matches!(error,
///         Error::Decode { kind: DecodeErrorKind::TruncatedData, .. } |
///         Error::Decode { kind: DecodeErrorKind::InsufficientData { .. }, .. }
///     )
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// BER decoding error.
    #[error("decode error at offset {offset}: {kind}")]
    Decode {
        offset: usize,
        kind: DecodeErrorKind,
    },

    /// BER encoding error.
    #[error("encode error: {kind}")]
    Encode { kind: EncodeErrorKind },

    /// Invalid OID format.
    #[error("invalid OID{}: {kind}", input.as_ref().map(|s| format!(" {:?}", s)).unwrap_or_default())]
    InvalidOid {
        kind: OidErrorKind,
        input: Option<Box<str>>, // Only allocated when parsing string input
    },
}

impl Error {
    /// Create a decode error.
    pub fn decode(offset: usize, kind: DecodeErrorKind) -> Self {
        Self::Decode { offset, kind }
    }

    /// Create an encode error.
    pub fn encode(kind: EncodeErrorKind) -> Self {
        Self::Encode { kind }
    }

    /// Create an invalid OID error from a kind (no input string).
    pub fn invalid_oid(kind: OidErrorKind) -> Self {
        Self::InvalidOid { kind, input: None }
    }

    /// Create an invalid OID error with the input string that failed.
    pub fn invalid_oid_with_input(kind: OidErrorKind, input: impl Into<Box<str>>) -> Self {
        Self::InvalidOid {
            kind,
            input: Some(input.into()),
        }
    }

    /// Rebase a decode offset reported relative to a sub-slice.
    pub(crate) fn offset_by(self, base: usize) -> Self {
        match self {
            Self::Decode { offset, kind } => Self::Decode {
                offset: offset + base,
                kind,
            },
            other => other,
        }
    }

    /// Get the decode error kind, if this is a decode error.
    pub fn decode_kind(&self) -> Option<DecodeErrorKind> {
        match self {
            Self::Decode { kind, .. } => Some(*kind),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_size_budget() {
        // Keep Result<T> small; the largest variant carries a boxed str.
        assert!(
            std::mem::size_of::<Error>() <= 40,
            "Error size {} exceeds 40-byte budget",
            std::mem::size_of::<Error>()
        );
    }

    #[test]
    fn test_display_includes_offset_and_kind() {
        let err = Error::decode(3, DecodeErrorKind::UnsupportedType(0x44));
        assert_eq!(
            err.to_string(),
            "decode error at offset 3: unable to decode type 0x44: not implemented"
        );
    }

    #[test]
    fn test_invalid_oid_display_with_input() {
        let err = Error::invalid_oid_with_input(OidErrorKind::InvalidArc, "1.3.x");
        assert_eq!(err.to_string(), "invalid OID \"1.3.x\": invalid arc value");

        let err = Error::invalid_oid(OidErrorKind::TooShort);
        assert_eq!(err.to_string(), "invalid OID: OID must have at least 2 arcs");
    }

    #[test]
    fn test_decode_kind() {
        let err = Error::decode(0, DecodeErrorKind::EmptyOid);
        assert_eq!(err.decode_kind(), Some(DecodeErrorKind::EmptyOid));
        assert_eq!(
            Error::encode(EncodeErrorKind::NegativeLength(-1)).decode_kind(),
            None
        );
    }
}
