//! SNMP protocol version.

use std::fmt;

/// SNMP protocol version.
///
/// Only selects textual rendering and the version field's wire value; the
/// BER codec itself is version independent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Version {
    /// SNMPv1
    V1,
    /// SNMPv2c (community-based)
    #[default]
    V2c,
}

impl Version {
    /// Wire value of the message version field.
    ///
    /// ```
    /// use snmp_codec::Version;
    ///
    /// assert_eq!(Version::V1.as_i32(), 0);
    /// assert_eq!(Version::V2c.as_i32(), 1);
    /// ```
    pub const fn as_i32(self) -> i32 {
        match self {
            Version::V1 => 0,
            Version::V2c => 1,
        }
    }

    /// Look up a version from its wire value.
    pub const fn from_i32(value: i32) -> Option<Self> {
        match value {
            0 => Some(Version::V1),
            1 => Some(Version::V2c),
            _ => None,
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Version::V1 => write!(f, "1"),
            Version::V2c => write!(f, "2c"),
        }
    }
}
