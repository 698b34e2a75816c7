//! BER tag definitions for SNMP.
//!
//! Tag encoding follows X.690 Section 8.1.2:
//! - Bits 7-6: Class (00=Universal, 01=Application, 10=Context-specific, 11=Private)
//! - Bit 5: Primitive (0) or Constructed (1)
//! - Bits 4-0: Tag number (0-30, or 31 for long form)

use std::fmt;

/// Tag class bits (bits 7-6)
pub mod class {
    pub const UNIVERSAL: u8 = 0x00;
    pub const APPLICATION: u8 = 0x40;
    pub const CONTEXT_SPECIFIC: u8 = 0x80;
    pub const PRIVATE: u8 = 0xC0;
}

/// Universal tags (class bits 00)
pub mod universal {
    pub const END_OF_CONTENTS: u8 = 0x00;
    pub const BOOLEAN: u8 = 0x01;
    pub const INTEGER: u8 = 0x02;
    pub const BIT_STRING: u8 = 0x03;
    pub const OCTET_STRING: u8 = 0x04;
    pub const NULL: u8 = 0x05;
    pub const OBJECT_IDENTIFIER: u8 = 0x06;
    pub const OBJECT_DESCRIPTION: u8 = 0x07;
}

/// Application tags (class bits 01) - SNMP-specific types
pub mod application {
    pub const IP_ADDRESS: u8 = 0x40;
    pub const COUNTER32: u8 = 0x41;
    pub const GAUGE32: u8 = 0x42;
    pub const TIMETICKS: u8 = 0x43;
    pub const OPAQUE: u8 = 0x44;
    pub const NSAP_ADDRESS: u8 = 0x45;
    pub const COUNTER64: u8 = 0x46;
    pub const UINTEGER32: u8 = 0x47;
}

/// Context-specific tags (class bits 10) - Exception values
pub mod context {
    pub const NO_SUCH_OBJECT: u8 = 0x80;
    pub const NO_SUCH_INSTANCE: u8 = 0x81;
    pub const END_OF_MIB_VIEW: u8 = 0x82;
}

/// Get the class of a tag
#[inline]
pub const fn tag_class(tag: u8) -> u8 {
    tag & 0xC0
}

/// ASN.1/SNMP type identified by a TLV tag byte.
///
/// The discriminant is the wire byte, so `Asn1Ber::Counter32 as u8 == 0x41`.
/// Only a subset of these is decoded by [`decode_value`](crate::decode_value);
/// the rest are representable so callers can name them in diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Asn1Ber {
    EndOfContents = universal::END_OF_CONTENTS,
    Boolean = universal::BOOLEAN,
    Integer = universal::INTEGER,
    BitString = universal::BIT_STRING,
    OctetString = universal::OCTET_STRING,
    Null = universal::NULL,
    ObjectIdentifier = universal::OBJECT_IDENTIFIER,
    ObjectDescription = universal::OBJECT_DESCRIPTION,
    IpAddress = application::IP_ADDRESS,
    Counter32 = application::COUNTER32,
    Gauge32 = application::GAUGE32,
    TimeTicks = application::TIMETICKS,
    Opaque = application::OPAQUE,
    NsapAddress = application::NSAP_ADDRESS,
    Counter64 = application::COUNTER64,
    Uinteger32 = application::UINTEGER32,
    NoSuchObject = context::NO_SUCH_OBJECT,
    NoSuchInstance = context::NO_SUCH_INSTANCE,
    EndOfMibView = context::END_OF_MIB_VIEW,
}

impl Asn1Ber {
    /// Look up the type for a raw tag byte.
    pub const fn from_u8(tag: u8) -> Option<Self> {
        Some(match tag {
            universal::END_OF_CONTENTS => Self::EndOfContents,
            universal::BOOLEAN => Self::Boolean,
            universal::INTEGER => Self::Integer,
            universal::BIT_STRING => Self::BitString,
            universal::OCTET_STRING => Self::OctetString,
            universal::NULL => Self::Null,
            universal::OBJECT_IDENTIFIER => Self::ObjectIdentifier,
            universal::OBJECT_DESCRIPTION => Self::ObjectDescription,
            application::IP_ADDRESS => Self::IpAddress,
            application::COUNTER32 => Self::Counter32,
            application::GAUGE32 => Self::Gauge32,
            application::TIMETICKS => Self::TimeTicks,
            application::OPAQUE => Self::Opaque,
            application::NSAP_ADDRESS => Self::NsapAddress,
            application::COUNTER64 => Self::Counter64,
            application::UINTEGER32 => Self::Uinteger32,
            context::NO_SUCH_OBJECT => Self::NoSuchObject,
            context::NO_SUCH_INSTANCE => Self::NoSuchInstance,
            context::END_OF_MIB_VIEW => Self::EndOfMibView,
            _ => return None,
        })
    }

    /// The wire byte for this type.
    pub const fn as_u8(self) -> u8 {
        self as u8
    }
}

impl From<Asn1Ber> for u8 {
    fn from(t: Asn1Ber) -> Self {
        t.as_u8()
    }
}

impl TryFrom<u8> for Asn1Ber {
    type Error = u8;

    fn try_from(tag: u8) -> Result<Self, Self::Error> {
        Self::from_u8(tag).ok_or(tag)
    }
}

impl fmt::Display for Asn1Ber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::EndOfContents => "EndOfContents",
            Self::Boolean => "Boolean",
            Self::Integer => "Integer",
            Self::BitString => "BitString",
            Self::OctetString => "OctetString",
            Self::Null => "Null",
            Self::ObjectIdentifier => "ObjectIdentifier",
            Self::ObjectDescription => "ObjectDescription",
            Self::IpAddress => "IpAddress",
            Self::Counter32 => "Counter32",
            Self::Gauge32 => "Gauge32",
            Self::TimeTicks => "TimeTicks",
            Self::Opaque => "Opaque",
            Self::NsapAddress => "NsapAddress",
            Self::Counter64 => "Counter64",
            Self::Uinteger32 => "Uinteger32",
            Self::NoSuchObject => "NoSuchObject",
            Self::NoSuchInstance => "NoSuchInstance",
            Self::EndOfMibView => "EndOfMibView",
        };
        f.write_str(name)
    }
}
