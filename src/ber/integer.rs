//! Big-endian integer decoding.
//!
//! Signed values are two's complement; unsigned values are plain big-endian.
//! At most 8 content octets are accepted.

use std::sync::LazyLock;

use num::BigInt;

use crate::error::{DecodeErrorKind, Error, Result};

/// `2^63`, added back when bridging unsigned values above `i64::MAX`.
static UINT64_TO_BIG_INT_DELTA: LazyLock<BigInt> = LazyLock::new(|| BigInt::from(1u8) << 63u32);

fn accumulate(bytes: &[u8]) -> Result<u64> {
    if bytes.len() > 8 {
        tracing::debug!(target: "snmp_codec::ber", { length = bytes.len() }, "integer too large");
        return Err(Error::decode(
            0,
            DecodeErrorKind::IntegerTooLarge {
                length: bytes.len(),
            },
        ));
    }
    Ok(bytes.iter().fold(0u64, |acc, &b| (acc << 8) | b as u64))
}

/// Decode a big-endian two's complement integer of up to 8 bytes.
///
/// An empty slice decodes as zero, matching [`parse_uint64`].
///
/// # Examples
///
/// ```
/// use snmp_codec::ber::integer::parse_int64;
///
/// assert_eq!(parse_int64(&[0x05]).unwrap(), 5);
/// assert_eq!(parse_int64(&[0xFF]).unwrap(), -1);
/// assert_eq!(parse_int64(&[0x00, 0x80]).unwrap(), 128);
/// assert_eq!(parse_int64(&[]).unwrap(), 0);
/// assert!(parse_int64(&[0; 9]).is_err());
/// ```
pub fn parse_int64(bytes: &[u8]) -> Result<i64> {
    let raw = accumulate(bytes)?;
    if bytes.is_empty() {
        return Ok(0);
    }

    // Shift up and down in order to sign extend the result.
    let shift = 64 - 8 * bytes.len() as u32;
    Ok(((raw << shift) as i64) >> shift)
}

/// Decode a signed integer that must fit in 32 bits.
pub fn parse_int32(bytes: &[u8]) -> Result<i32> {
    let value = parse_int64(bytes)?;
    i32::try_from(value).map_err(|_| {
        tracing::debug!(target: "snmp_codec::ber", { value }, "integer does not fit in 32 bits");
        Error::decode(0, DecodeErrorKind::IntegerOverflow)
    })
}

/// Decode a big-endian unsigned integer of up to 8 bytes.
///
/// An empty slice decodes as zero.
pub fn parse_uint64(bytes: &[u8]) -> Result<u64> {
    accumulate(bytes)
}

/// Decode an unsigned integer that must fit in 32 bits.
///
/// Accepts the 5-byte form with a leading zero that BER uses for values
/// with the top bit set.
pub fn parse_uint32(bytes: &[u8]) -> Result<u32> {
    let value = parse_uint64(bytes)?;
    u32::try_from(value).map_err(|_| {
        tracing::debug!(target: "snmp_codec::ber", { value }, "unsigned integer does not fit in 32 bits");
        Error::decode(0, DecodeErrorKind::IntegerOverflow)
    })
}

/// Read a big-endian 16-bit field from the first two bytes of `content`.
///
/// Fixed-width, unlike the BER integer readers: any bytes after the first
/// two are ignored.
///
/// ```
/// use snmp_codec::ber::integer::parse_uint16;
///
/// assert_eq!(parse_uint16(&[0x01, 0x02]).unwrap(), 0x0102);
/// assert!(parse_uint16(&[0x01]).is_err());
/// ```
pub fn parse_uint16(content: &[u8]) -> Result<u16> {
    match content {
        [hi, lo, ..] => Ok(u16::from_be_bytes([*hi, *lo])),
        _ => Err(Error::decode(
            content.len(),
            DecodeErrorKind::InsufficientData {
                needed: 2,
                available: content.len(),
            },
        )),
    }
}

/// Convert an unsigned 64-bit value to an arbitrary-precision integer.
///
/// Values above `i64::MAX` are split as `(n - 2^63) + 2^63`, so the
/// remainder always fits a signed 64-bit integer.
pub fn uint64_to_big_int(n: u64) -> BigInt {
    match i64::try_from(n) {
        Ok(v) => BigInt::from(v),
        Err(_) => {
            let rest = (n - i64::MAX as u64 - 1) as i64;
            BigInt::from(rest) + &*UINT64_TO_BIG_INT_DELTA
        }
    }
}
