//! BER length encoding and decoding.
//!
//! Length encoding follows X.690 Section 8.1.3:
//! - Short form: Single byte, bit 8=0, value 0-127
//! - Long form: Initial byte (bit 8=1, bits 7-1=count), followed by length bytes
//! - Indefinite form (0x80): Rejected per net-snmp behavior

use smallvec::SmallVec;

use crate::error::{DecodeErrorKind, EncodeErrorKind, Error, Result};

/// Maximum number of length octets we'll accept in long form.
///
/// Any length [`marshal_length`] can produce that fits a `usize` parses
/// back; wider length fields cannot be represented and are rejected.
pub const MAX_LENGTH_OCTETS: usize = size_of::<usize>();

/// Encode a TLV length.
///
/// Lengths below 127 use the short form. Everything else uses the long
/// definite form: a header byte `0x80 | n` followed by the `n` minimal
/// big-endian length octets.
///
/// # Examples
///
/// ```
/// use snmp_codec::ber::length::marshal_length;
///
/// assert_eq!(marshal_length(5).unwrap().as_slice(), &[0x05]);
/// assert_eq!(marshal_length(200).unwrap().as_slice(), &[0x81, 0xC8]);
/// assert_eq!(marshal_length(256).unwrap().as_slice(), &[0x82, 0x01, 0x00]);
/// assert!(marshal_length(-1).is_err());
/// ```
pub fn marshal_length(length: i64) -> Result<SmallVec<[u8; 9]>> {
    if length < 0 {
        return Err(Error::encode(EncodeErrorKind::NegativeLength(length)));
    }

    let mut buf = SmallVec::new();
    if length < 127 {
        buf.push(length as u8);
        return Ok(buf);
    }

    let be = (length as u64).to_be_bytes();
    let skip = be.iter().take_while(|&&b| b == 0).count();
    let octets = &be[skip..];

    buf.push(0x80 | octets.len() as u8);
    buf.extend_from_slice(octets);
    Ok(buf)
}

/// Decode the length of the TLV starting at `data[0]`.
///
/// Returns `(total, cursor)` where `total` is the size of tag + length +
/// value measured from the start of `data`, and `cursor` is the offset at
/// which the value begins.
///
/// Buffers of two bytes or fewer are treated as an empty field
/// (`cursor = 1`, `total = 2`), which is how the zero-length OCTET STRING
/// `04 00` is handled.
///
/// `total` is not checked against `data.len()`; callers must do that before
/// slicing the value.
pub fn parse_length(data: &[u8]) -> Result<(usize, usize)> {
    if data.len() <= 2 {
        return Ok((2, 1));
    }

    let first = data[1];
    if first & 0x80 == 0 {
        // Short form
        return Ok((first as usize + 2, 2));
    }

    // Long form
    let num_octets = (first & 0x7F) as usize;

    if num_octets == 0 {
        tracing::debug!(target: "snmp_codec::ber", { snmp.offset = 1, kind = %DecodeErrorKind::IndefiniteLength }, "indefinite length");
        return Err(Error::decode(1, DecodeErrorKind::IndefiniteLength));
    }

    if num_octets > MAX_LENGTH_OCTETS {
        tracing::debug!(target: "snmp_codec::ber", { snmp.offset = 1, octets = num_octets }, "length encoding too long");
        return Err(Error::decode(
            1,
            DecodeErrorKind::LengthTooLong { octets: num_octets },
        ));
    }

    let octets = data
        .get(2..2 + num_octets)
        .ok_or_else(|| Error::decode(data.len(), DecodeErrorKind::TruncatedData))?;

    let len = octets
        .iter()
        .try_fold(0usize, |acc, &b| acc.checked_mul(256)?.checked_add(b as usize));
    let cursor = 2 + num_octets;

    match len.and_then(|len| len.checked_add(cursor)) {
        Some(total) => Ok((total, cursor)),
        None => {
            tracing::debug!(target: "snmp_codec::ber", { snmp.offset = 1, octets = num_octets }, "length does not fit in usize");
            Err(Error::decode(
                1,
                DecodeErrorKind::LengthTooLong { octets: num_octets },
            ))
        }
    }
}
