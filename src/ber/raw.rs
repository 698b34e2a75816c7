//! Raw field parsing.
//!
//! A narrow decoder for the three field types needed while walking nested
//! structures: INTEGER, OCTET STRING and OBJECT IDENTIFIER. Values come back
//! undecorated (no hex rendering, OIDs as arcs) along with the number of
//! bytes the field occupied.

use bytes::Bytes;

use super::integer::parse_uint64;
use super::tag::universal;
use super::{checked_length, strict_length};
use crate::error::{DecodeErrorKind, Error, Result};
use crate::format::hex;
use crate::oid::Oid;

/// A field pulled out by [`parse_raw_field`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawField {
    /// INTEGER content read as unsigned big-endian.
    Integer(u64),
    /// OCTET STRING content, as-is.
    OctetString(Bytes),
    /// OBJECT IDENTIFIER arcs.
    ObjectIdentifier(Oid),
}

/// Parse the INTEGER, OCTET STRING or OBJECT IDENTIFIER at the start of
/// `data`.
///
/// Returns the field and the number of bytes it consumed.
///
/// ```
/// use snmp_codec::ber::raw::{RawField, parse_raw_field};
///
/// let (field, consumed) = parse_raw_field(&[0x02, 0x01, 0x2A, 0xFF]).unwrap();
/// assert_eq!(field, RawField::Integer(42));
/// assert_eq!(consumed, 3);
/// ```
pub fn parse_raw_field(data: &[u8]) -> Result<(RawField, usize)> {
    tracing::trace!(target: "snmp_codec::ber", { data = %hex::Dump(data) }, "parsing raw field");

    let Some(&tag) = data.first() else {
        return Err(Error::decode(0, DecodeErrorKind::TruncatedData));
    };

    match tag {
        universal::INTEGER => {
            // Single content octet is by far the most common case
            if let [_, 0x01, value, ..] = data {
                return Ok((RawField::Integer(*value as u64), 3));
            }
            let (total, cursor) = strict_length(data)?;
            let value = parse_uint64(&data[cursor..total]).map_err(|e| e.offset_by(cursor))?;
            Ok((RawField::Integer(value), total))
        }
        universal::OCTET_STRING => {
            let (total, cursor) = checked_length(data)?;
            let value = Bytes::copy_from_slice(&data[cursor..total]);
            Ok((RawField::OctetString(value), total))
        }
        universal::OBJECT_IDENTIFIER => {
            let (total, cursor) = strict_length(data)?;
            let oid = Oid::from_ber(&data[cursor..total]).map_err(|e| e.offset_by(cursor))?;
            Ok((RawField::ObjectIdentifier(oid), total))
        }
        _ => {
            tracing::debug!(target: "snmp_codec::ber", { snmp.tag = tag }, "unknown field type");
            Err(Error::decode(0, DecodeErrorKind::UnknownFieldType(tag)))
        }
    }
}
