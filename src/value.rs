//! Typed SNMP value decoding.
//!
//! [`decode_value`] reads the tag byte of a single TLV and hands the rest to
//! the matching codec in [`crate::ber`], producing a [`Variable`].

use std::net::Ipv4Addr;

use num::BigInt;

use crate::ber::checked_length;
use crate::ber::integer::{parse_int64, parse_uint32, uint64_to_big_int};
use crate::ber::raw::{RawField, parse_raw_field};
use crate::ber::tag::{Asn1Ber, application, context, universal};
use crate::error::{DecodeErrorKind, Error, Result};
use crate::format::hex;
use crate::oid::Oid;

/// A decoded SNMP value.
///
/// Each variant corresponds to exactly one BER tag, so the payload shape is
/// always consistent with [`Variable::ber_type`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Variable {
    /// INTEGER (signed, up to 64 bits on the wire).
    Integer(i64),

    /// OCTET STRING.
    ///
    /// Text is kept as-is. Content that starts with a zero octet, or that is
    /// not valid UTF-8, is rendered as space-separated hex pairs instead.
    OctetString(String),

    /// NULL
    Null,

    /// OBJECT IDENTIFIER
    ObjectIdentifier(Oid),

    /// IpAddress
    IpAddress(Ipv4Addr),

    /// Counter32 (unsigned 32-bit, wrapping)
    Counter32(u32),

    /// Gauge32 (unsigned 32-bit, non-wrapping)
    Gauge32(u32),

    /// TimeTicks (hundredths of seconds).
    ///
    /// Decoded as a signed integer.
    TimeTicks(i64),

    /// Counter64.
    ///
    /// Decoded as a signed 64-bit integer of at most 8 content octets. The
    /// minimal encoding of a counter above `i64::MAX` needs a leading zero
    /// octet, 9 in total, and is rejected with `IntegerTooLarge`; only an
    /// 8-octet encoding with the top bit set decodes, and it comes out
    /// negative. Use [`Variable::as_u64`] or [`Variable::to_big_int`] to read
    /// the unsigned value.
    Counter64(i64),

    /// noSuchObject exception
    NoSuchObject,

    /// noSuchInstance exception
    NoSuchInstance,
}

impl Variable {
    /// The BER type tag this value was decoded from.
    ///
    /// ```
    /// use snmp_codec::{Asn1Ber, Variable};
    ///
    /// assert_eq!(Variable::Gauge32(7).ber_type(), Asn1Ber::Gauge32);
    /// assert_eq!(Variable::Null.ber_type().as_u8(), 0x05);
    /// ```
    pub fn ber_type(&self) -> Asn1Ber {
        match self {
            Variable::Integer(_) => Asn1Ber::Integer,
            Variable::OctetString(_) => Asn1Ber::OctetString,
            Variable::Null => Asn1Ber::Null,
            Variable::ObjectIdentifier(_) => Asn1Ber::ObjectIdentifier,
            Variable::IpAddress(_) => Asn1Ber::IpAddress,
            Variable::Counter32(_) => Asn1Ber::Counter32,
            Variable::Gauge32(_) => Asn1Ber::Gauge32,
            Variable::TimeTicks(_) => Asn1Ber::TimeTicks,
            Variable::Counter64(_) => Asn1Ber::Counter64,
            Variable::NoSuchObject => Asn1Ber::NoSuchObject,
            Variable::NoSuchInstance => Asn1Ber::NoSuchInstance,
        }
    }

    /// Try to get as i64.
    ///
    /// Returns `Some` for [`Variable::Integer`], [`Variable::TimeTicks`] and
    /// the 32-bit unsigned types.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Variable::Integer(v) | Variable::TimeTicks(v) => Some(*v),
            Variable::Counter32(v) | Variable::Gauge32(v) => Some(*v as i64),
            _ => None,
        }
    }

    /// Try to get as u64.
    ///
    /// Counter64 is reinterpreted as unsigned; other numeric types must be
    /// non-negative.
    ///
    /// ```
    /// use snmp_codec::Variable;
    ///
    /// assert_eq!(Variable::Counter64(-1).as_u64(), Some(u64::MAX));
    /// assert_eq!(Variable::Counter32(100).as_u64(), Some(100));
    /// assert_eq!(Variable::Integer(-1).as_u64(), None);
    /// ```
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Variable::Counter64(v) => Some(*v as u64),
            Variable::Counter32(v) | Variable::Gauge32(v) => Some(*v as u64),
            Variable::Integer(v) | Variable::TimeTicks(v) => u64::try_from(*v).ok(),
            _ => None,
        }
    }

    /// Try to get the OCTET STRING text.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Variable::OctetString(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get as OID.
    pub fn as_oid(&self) -> Option<&Oid> {
        match self {
            Variable::ObjectIdentifier(oid) => Some(oid),
            _ => None,
        }
    }

    /// Try to get as IP address.
    pub fn as_ip(&self) -> Option<Ipv4Addr> {
        match self {
            Variable::IpAddress(addr) => Some(*addr),
            _ => None,
        }
    }

    /// Check if this is an SNMP exception placeholder.
    pub fn is_exception(&self) -> bool {
        matches!(self, Variable::NoSuchObject | Variable::NoSuchInstance)
    }

    /// Convert a numeric value to an arbitrary-precision integer.
    ///
    /// Counter64 goes through the unsigned bridge so values above
    /// `i64::MAX` are represented exactly.
    ///
    /// ```
    /// use snmp_codec::Variable;
    /// use num::BigInt;
    ///
    /// let v = Variable::Counter64(-2);
    /// assert_eq!(v.to_big_int(), Some(BigInt::from(u64::MAX - 1)));
    /// assert_eq!(Variable::Null.to_big_int(), None);
    /// ```
    pub fn to_big_int(&self) -> Option<BigInt> {
        match self {
            Variable::Counter64(v) => Some(uint64_to_big_int(*v as u64)),
            _ => self.as_i64().map(BigInt::from),
        }
    }

    /// Textual rendering of the payload.
    ///
    /// Exceptions and NULL render as an empty string.
    pub fn value_string(&self) -> String {
        match self {
            Variable::Integer(v) | Variable::TimeTicks(v) => v.to_string(),
            Variable::OctetString(s) => s.clone(),
            Variable::ObjectIdentifier(oid) => oid.to_string(),
            Variable::IpAddress(addr) => addr.to_string(),
            Variable::Counter32(v) | Variable::Gauge32(v) => v.to_string(),
            Variable::Counter64(v) => (*v as u64).to_string(),
            Variable::Null | Variable::NoSuchObject | Variable::NoSuchInstance => String::new(),
        }
    }
}

impl std::fmt::Display for Variable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Variable::Null => write!(f, "Null"),
            Variable::NoSuchObject => write!(f, "NoSuchObject"),
            Variable::NoSuchInstance => write!(f, "NoSuchInstance"),
            Variable::OctetString(s) => write!(f, "{}: {:?}", self.ber_type(), s),
            _ => write!(f, "{}: {}", self.ber_type(), self.value_string()),
        }
    }
}

/// Decode the single TLV at the start of `data` into a [`Variable`].
///
/// Bytes past the end of the TLV are ignored. Every failure is returned as
/// an error; nothing falls back to a zero value.
///
/// # Examples
///
/// ```
/// use snmp_codec::{Variable, decode_value};
///
/// assert_eq!(decode_value(&[0x02, 0x01, 0x05]).unwrap(), Variable::Integer(5));
///
/// let oid = decode_value(&[0x06, 0x02, 0x2B, 0x06]).unwrap();
/// assert_eq!(oid.value_string(), "1.3.6");
///
/// let ip = decode_value(&[0x40, 0x04, 0xC0, 0xA8, 0x00, 0x01]).unwrap();
/// assert_eq!(ip.value_string(), "192.168.0.1");
/// ```
pub fn decode_value(data: &[u8]) -> Result<Variable> {
    let result = decode_tlv(data);
    match &result {
        Ok(value) => {
            tracing::trace!(target: "snmp_codec::value", { data = %hex::Dump(data), value = %value }, "decoded value");
        }
        Err(Error::Decode { offset, kind }) => {
            tracing::debug!(target: "snmp_codec::value", { snmp.offset = offset, kind = %kind, context = %hex::Row::new(data, *offset) }, "failed to decode value");
        }
        Err(err) => {
            tracing::debug!(target: "snmp_codec::value", { error = %err }, "failed to decode value");
        }
    }
    result
}

fn decode_tlv(data: &[u8]) -> Result<Variable> {
    let Some(&tag) = data.first() else {
        return Err(Error::decode(0, DecodeErrorKind::TruncatedData));
    };

    match tag {
        universal::INTEGER => Ok(Variable::Integer(signed_body(data)?)),
        universal::OCTET_STRING => {
            let (total, cursor) = checked_length(data)?;
            let body = &data[cursor..total];
            Ok(Variable::OctetString(octet_string_text(body, total)))
        }
        universal::NULL => Ok(Variable::Null),
        universal::OBJECT_IDENTIFIER => match parse_raw_field(data)? {
            (RawField::ObjectIdentifier(oid), _) => Ok(Variable::ObjectIdentifier(oid)),
            // parse_raw_field dispatches on the same tag byte
            _ => Err(Error::decode(0, DecodeErrorKind::UnsupportedType(tag))),
        },
        application::IP_ADDRESS => {
            let [_, length, a, b, c, d, ..] = *data else {
                return Err(Error::decode(
                    data.len(),
                    DecodeErrorKind::TruncatedIpAddress {
                        available: data.len(),
                    },
                ));
            };
            if length != 4 {
                return Err(Error::decode(
                    1,
                    DecodeErrorKind::InvalidIpAddressLength {
                        length: length as usize,
                    },
                ));
            }
            Ok(Variable::IpAddress(Ipv4Addr::new(a, b, c, d)))
        }
        application::COUNTER32 => Ok(Variable::Counter32(unsigned_body(data)?)),
        application::GAUGE32 => Ok(Variable::Gauge32(unsigned_body(data)?)),
        application::TIMETICKS => Ok(Variable::TimeTicks(signed_body(data)?)),
        application::COUNTER64 => Ok(Variable::Counter64(signed_body(data)?)),
        context::NO_SUCH_OBJECT => Ok(Variable::NoSuchObject),
        context::NO_SUCH_INSTANCE => Ok(Variable::NoSuchInstance),
        _ => Err(Error::decode(0, DecodeErrorKind::UnsupportedType(tag))),
    }
}

fn signed_body(data: &[u8]) -> Result<i64> {
    let (total, cursor) = checked_length(data)?;
    parse_int64(&data[cursor..total]).map_err(|e| e.offset_by(cursor))
}

fn unsigned_body(data: &[u8]) -> Result<u32> {
    let (total, cursor) = checked_length(data)?;
    parse_uint32(&data[cursor..total]).map_err(|e| e.offset_by(cursor))
}

fn octet_string_text(body: &[u8], total: usize) -> String {
    match body.first() {
        None => String::new(),
        Some(0) if total == 2 => String::new(),
        Some(0) => hex::spaced(body),
        Some(_) => match std::str::from_utf8(body) {
            Ok(s) => s.to_owned(),
            Err(_) => hex::spaced(body),
        },
    }
}
