//! BER (Basic Encoding Rules) primitives.
//!
//! SNMP uses a subset of BER: definite lengths only, primitive encodings,
//! and a handful of application and context tags on top of the universal
//! ones. Everything here works on fully buffered byte slices.

pub mod base128;
pub mod bit_string;
pub mod integer;
pub mod length;
pub mod raw;
pub mod tag;

pub use base128::{marshal_base128, parse_base128};
pub use bit_string::{BitStringValue, parse_bit_string};
pub use integer::{
    parse_int32, parse_int64, parse_uint16, parse_uint32, parse_uint64, uint64_to_big_int,
};
pub use length::{marshal_length, parse_length};
pub use raw::{RawField, parse_raw_field};
pub use tag::Asn1Ber;

use crate::error::{DecodeErrorKind, Error, Result};

/// Bounds-checked [`parse_length`].
///
/// Returns `(total, cursor)` with the guarantee that `cursor <= total <=
/// data.len()`, so `data[cursor..total]` is always safe to take.
pub(crate) fn checked_length(data: &[u8]) -> Result<(usize, usize)> {
    let (total, cursor) = parse_length(data)?;
    ensure_available(data, total)?;
    Ok((total, cursor))
}

/// Value region of a TLV whose length octets must be fully present.
///
/// Unlike [`parse_length`], a buffer of two bytes or fewer is not treated
/// as an empty field; `02 00` has an empty value region.
pub(crate) fn strict_length(data: &[u8]) -> Result<(usize, usize)> {
    let Some(&first) = data.get(1) else {
        return Err(Error::decode(data.len(), DecodeErrorKind::TruncatedData));
    };

    let (total, cursor) = if first & 0x80 == 0 {
        (first as usize + 2, 2)
    } else if data.len() <= 2 {
        return Err(Error::decode(data.len(), DecodeErrorKind::TruncatedData));
    } else {
        parse_length(data)?
    };

    ensure_available(data, total)?;
    Ok((total, cursor))
}

fn ensure_available(data: &[u8], needed: usize) -> Result<()> {
    if needed > data.len() {
        tracing::debug!(target: "snmp_codec::ber", { needed, available = data.len() }, "declared length exceeds buffer");
        return Err(Error::decode(
            data.len(),
            DecodeErrorKind::InsufficientData {
                needed,
                available: data.len(),
            },
        ));
    }
    Ok(())
}
