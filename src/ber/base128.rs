//! Base-128 variable length integers (OID subidentifiers).
//!
//! Each octet carries 7 data bits, most significant group first. Every octet
//! except the last has bit 8 set.

use bytes::BufMut;

use crate::error::{DecodeErrorKind, Error, Result};

/// Maximum number of 7-bit groups accepted in one subidentifier.
pub const MAX_GROUPS: usize = 5;

/// Append the base-128 encoding of `n` to `out`.
///
/// Zero encodes as a single `0x00` octet.
pub fn marshal_base128<B: BufMut>(n: u64, out: &mut B) {
    if n == 0 {
        out.put_u8(0);
        return;
    }

    // Count how many 7-bit groups we need
    let count = (64 - n.leading_zeros()).div_ceil(7);

    // Encode from MSB to LSB
    for i in (0..count).rev() {
        let mut byte = ((n >> (i * 7)) & 0x7F) as u8;
        if i > 0 {
            byte |= 0x80; // Continuation bit
        }
        out.put_u8(byte);
    }
}

/// Decode a base-128 integer starting at `data[offset]`.
///
/// Returns the value and the offset just past its terminating octet.
/// More than [`MAX_GROUPS`] groups is an `IntegerOverflow`; running off the
/// end of `data` first is `TruncatedBase128`.
pub fn parse_base128(data: &[u8], offset: usize) -> Result<(u64, usize)> {
    let mut value: u64 = 0;
    let mut pos = offset;

    for groups in 0.. {
        let Some(&byte) = data.get(pos) else {
            tracing::debug!(target: "snmp_codec::ber", { snmp.offset = pos, kind = %DecodeErrorKind::TruncatedBase128 }, "truncated base 128 integer");
            return Err(Error::decode(pos, DecodeErrorKind::TruncatedBase128));
        };

        if groups == MAX_GROUPS {
            tracing::debug!(target: "snmp_codec::ber", { snmp.offset = pos }, "base 128 integer too large");
            return Err(Error::decode(pos, DecodeErrorKind::IntegerOverflow));
        }

        value = (value << 7) | (byte & 0x7F) as u64;
        pos += 1;

        if byte & 0x80 == 0 {
            break;
        }
    }

    Ok((value, pos))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode(n: u64) -> Vec<u8> {
        let mut out = Vec::new();
        marshal_base128(n, &mut out);
        out
    }

    #[test]
    fn test_encode_zero() {
        assert_eq!(encode(0), vec![0x00]);
    }

    #[test]
    fn test_encode_single_group() {
        assert_eq!(encode(1), vec![0x01]);
        assert_eq!(encode(127), vec![0x7F]);
    }

    #[test]
    fn test_encode_multi_group() {
        assert_eq!(encode(128), vec![0x81, 0x00]);
        assert_eq!(encode(1079), vec![0x88, 0x37]);
        assert_eq!(encode(16383), vec![0xFF, 0x7F]);
        assert_eq!(encode(16384), vec![0x81, 0x80, 0x00]);
        assert_eq!(encode(u32::MAX as u64), vec![0x8F, 0xFF, 0xFF, 0xFF, 0x7F]);
    }

    #[test]
    fn test_decode_from_offset() {
        let data = [0x2B, 0x06, 0x88, 0x37, 0x01];
        assert_eq!(parse_base128(&data, 1).unwrap(), (6, 2));
        assert_eq!(parse_base128(&data, 2).unwrap(), (1079, 4));
        assert_eq!(parse_base128(&data, 4).unwrap(), (1, 5));
    }

    #[test]
    fn test_decode_non_minimal() {
        assert_eq!(parse_base128(&[0x80, 0x01], 0).unwrap(), (1, 2));
        assert_eq!(parse_base128(&[0x80, 0x00], 0).unwrap(), (0, 2));
    }

    #[test]
    fn test_decode_five_groups_accepted() {
        let data = [0x8F, 0xFF, 0xFF, 0xFF, 0x7F];
        assert_eq!(parse_base128(&data, 0).unwrap(), (u32::MAX as u64, 5));
    }

    #[test]
    fn test_decode_six_groups_rejected() {
        let data = [0x81, 0x80, 0x80, 0x80, 0x80, 0x00];
        let err = parse_base128(&data, 0).unwrap_err();
        assert_eq!(err, Error::decode(5, DecodeErrorKind::IntegerOverflow));
    }

    #[test]
    fn test_decode_truncated() {
        let err = parse_base128(&[0x81, 0x82], 0).unwrap_err();
        assert_eq!(err, Error::decode(2, DecodeErrorKind::TruncatedBase128));

        let err = parse_base128(&[0x01], 1).unwrap_err();
        assert_eq!(err.decode_kind(), Some(DecodeErrorKind::TruncatedBase128));
    }

    #[test]
    fn test_roundtrip_boundaries() {
        for n in [0u64, 1, 127, 128, 255, 16383, 16384, 2_097_151, 2_097_152, 1 << 34] {
            let bytes = encode(n);
            assert_eq!(parse_base128(&bytes, 0).unwrap(), (n, bytes.len()));
        }
    }
}
