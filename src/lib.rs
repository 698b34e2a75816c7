//! # snmp-codec
//!
//! BER codec for the SNMP wire format.
//!
//! ## Features
//!
//! - Definite-form TLV lengths, base-128 subidentifiers and big-endian
//!   integers with overflow detection
//! - Type-safe OID handling with dotted-decimal and BER conversions
//! - BIT STRING decoding with padding validation
//! - A single-step typed value decoder and a narrower raw field parser
//!
//! Every operation is a pure function over a fully buffered byte slice.
//! Malformed input is always reported as an [`Error`]; slicing never panics.
//!
//! ## Quick Start
//!
//! ```rust
//! use snmp_codec::{Variable, decode_value, marshal_length, marshal_oid};
//!
//! let value = decode_value(&[0x41, 0x02, 0x01, 0x00]).unwrap();
//! assert_eq!(value, Variable::Counter32(256));
//!
//! let oid = marshal_oid("1.3.6.1.2.1.1.1.0").unwrap();
//! assert_eq!(oid, vec![0x2B, 6, 1, 2, 1, 1, 1, 0]);
//!
//! assert_eq!(marshal_length(200).unwrap().as_slice(), &[0x81, 0xC8]);
//! ```

pub mod ber;
pub mod error;
pub mod format;
pub mod oid;
pub mod value;
pub mod version;

#[cfg(feature = "cli")]
pub mod cli;

// Re-exports for convenience
pub use ber::{
    Asn1Ber, BitStringValue, RawField, marshal_length, parse_bit_string, parse_length,
    parse_raw_field,
};
pub use error::{DecodeErrorKind, EncodeErrorKind, Error, OidErrorKind, Result};
pub use oid::{Oid, marshal_oid, oid_to_string, parse_object_identifier, string_to_oid};
pub use value::{Variable, decode_value};
pub use version::Version;

/// Testing utilities exposed via the `testing` feature.
#[cfg(feature = "testing")]
pub mod testing {
    pub use crate::format::hex::{
        DecodeError as HexDecodeError, decode as decode_hex, encode as encode_hex,
    };
}
