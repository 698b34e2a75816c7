//! BIT STRING decoding.
//!
//! Content octets: one octet holding the number of unused (padding) bits in
//! the final octet, followed by the bits packed MSB-first.

use bytes::Bytes;

use crate::error::{DecodeErrorKind, Error, Result};

/// A decoded BIT STRING.
///
/// The bits are padded up to the nearest byte in memory and the number of
/// valid bits is recorded. Padding bits are always zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitStringValue {
    bytes: Bytes,
    bit_length: usize,
}

impl BitStringValue {
    /// The packed bit octets.
    pub fn bytes(&self) -> &Bytes {
        &self.bytes
    }

    /// Number of meaningful bits.
    pub fn bit_length(&self) -> usize {
        self.bit_length
    }

    /// Get the bit at `index` (0 is the most significant bit of the first byte).
    ///
    /// Indexes outside `0..bit_length()` read as 0.
    pub fn at(&self, index: usize) -> u8 {
        if index >= self.bit_length {
            return 0;
        }
        let byte = self.bytes[index / 8];
        (byte >> (7 - index % 8)) & 1
    }

    /// Move the padding bits to the start of the first byte.
    ///
    /// When the value is already byte aligned (or empty) this returns the
    /// original storage without copying.
    ///
    /// ```
    /// use snmp_codec::ber::bit_string::parse_bit_string;
    ///
    /// // 0b1010_1 followed by 3 padding bits
    /// let bits = parse_bit_string(&[0x03, 0xA8]).unwrap();
    /// assert_eq!(bits.right_align().as_ref(), &[0x15]);
    /// ```
    pub fn right_align(&self) -> Bytes {
        let shift = 8 - self.bit_length % 8;
        if shift == 8 || self.bytes.is_empty() {
            return self.bytes.clone();
        }

        let mut aligned = Vec::with_capacity(self.bytes.len());
        aligned.push(self.bytes[0] >> shift);
        for pair in self.bytes.windows(2) {
            aligned.push((pair[0] << (8 - shift)) | (pair[1] >> shift));
        }
        Bytes::from(aligned)
    }
}

/// Decode BIT STRING content octets.
///
/// Fails on empty input, a padding count above 7, a padding count with no
/// data octets, or padding bits that are not zero.
pub fn parse_bit_string(data: &[u8]) -> Result<BitStringValue> {
    let Some((&padding, bits)) = data.split_first() else {
        tracing::debug!(target: "snmp_codec::ber", { kind = %DecodeErrorKind::EmptyBitString }, "empty BIT STRING");
        return Err(Error::decode(0, DecodeErrorKind::EmptyBitString));
    };

    let invalid = padding > 7
        || (bits.is_empty() && padding > 0)
        || bits.last().is_some_and(|&last| last & ((1u8 << padding) - 1) != 0);

    if invalid {
        tracing::debug!(target: "snmp_codec::ber", { padding }, "invalid padding bits in BIT STRING");
        return Err(Error::decode(0, DecodeErrorKind::InvalidPadding { padding }));
    }

    Ok(BitStringValue {
        bytes: Bytes::copy_from_slice(bits),
        bit_length: bits.len() * 8 - padding as usize,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_padded() {
        let bits = parse_bit_string(&[0x04, 0xF0]).unwrap();
        assert_eq!(bits.bit_length(), 4);
        assert_eq!(bits.bytes().as_ref(), &[0xF0]);
    }

    #[test]
    fn test_parse_rejects_set_padding_bits() {
        let err = parse_bit_string(&[0x04, 0xF8]).unwrap_err();
        assert_eq!(
            err.decode_kind(),
            Some(DecodeErrorKind::InvalidPadding { padding: 4 })
        );
    }

    #[test]
    fn test_parse_empty() {
        let err = parse_bit_string(&[]).unwrap_err();
        assert_eq!(err.decode_kind(), Some(DecodeErrorKind::EmptyBitString));
    }

    #[test]
    fn test_parse_padding_out_of_range() {
        assert!(parse_bit_string(&[0x08, 0x00]).is_err());
        assert!(parse_bit_string(&[0xFF, 0x00]).is_err());
    }

    #[test]
    fn test_parse_padding_without_data() {
        assert!(parse_bit_string(&[0x01]).is_err());

        let empty = parse_bit_string(&[0x00]).unwrap();
        assert_eq!(empty.bit_length(), 0);
        assert!(empty.bytes().is_empty());
    }

    #[test]
    fn test_parse_seven_padding_bits() {
        let bits = parse_bit_string(&[0x07, 0x00, 0x80]).unwrap();
        assert_eq!(bits.bit_length(), 9);
        assert_eq!(bits.at(8), 1);
    }

    #[test]
    fn test_at() {
        // 1010 0000 0000 0001, padding 0
        let bits = parse_bit_string(&[0x00, 0xA0, 0x01]).unwrap();
        assert_eq!(bits.at(0), 1);
        assert_eq!(bits.at(1), 0);
        assert_eq!(bits.at(2), 1);
        assert_eq!(bits.at(3), 0);
        assert_eq!(bits.at(15), 1);
        assert_eq!(bits.at(16), 0);
        assert_eq!(bits.at(usize::MAX), 0);
    }

    #[test]
    fn test_at_ignores_padding() {
        let bits = parse_bit_string(&[0x04, 0xF0]).unwrap();
        assert_eq!(bits.at(3), 1);
        assert_eq!(bits.at(4), 0);
        assert_eq!(bits.at(7), 0);
    }

    #[test]
    fn test_right_align_shifts_across_bytes() {
        // bits 1111 1111 1 then 7 padding bits
        let bits = parse_bit_string(&[0x07, 0xFF, 0x80]).unwrap();
        assert_eq!(bits.right_align().as_ref(), &[0x01, 0xFF]);
    }

    #[test]
    fn test_right_align_aligned_is_unchanged() {
        let bits = parse_bit_string(&[0x00, 0xDE, 0xAD]).unwrap();
        let aligned = bits.right_align();
        assert_eq!(aligned.as_ref(), &[0xDE, 0xAD]);
        // Same storage, no copy
        assert_eq!(aligned.as_ptr(), bits.bytes().as_ptr());
    }

    #[test]
    fn test_right_align_empty() {
        let bits = parse_bit_string(&[0x00]).unwrap();
        assert!(bits.right_align().is_empty());
    }
}
