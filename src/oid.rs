//! Object Identifier (OID) type and codec.
//!
//! OIDs are stored as `SmallVec<[u32; 16]>` to avoid heap allocation for common OIDs.
//!
//! Wire form: the first octet is `40 * arc1 + arc2`, every following arc is a
//! base-128 subidentifier (see [`crate::ber::base128`]).

use crate::ber::base128::{marshal_base128, parse_base128};
use crate::error::{DecodeErrorKind, Error, OidErrorKind, Result};
use smallvec::SmallVec;
use std::fmt;

/// Maximum number of arcs (subidentifiers) allowed in a decoded OID.
///
/// Per RFC 2578 Section 3.5: "there are at most 128 sub-identifiers in a value".
pub const MAX_OID_LEN: usize = 128;

/// Largest first arc accepted by the encoder.
pub const MAX_FIRST_ARC: u32 = 6;

/// Object Identifier.
///
/// Stored as a sequence of arc values (u32). Uses SmallVec to avoid
/// heap allocation for OIDs with 16 or fewer arcs.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Oid {
    arcs: SmallVec<[u32; 16]>,
}

impl Oid {
    /// Create an empty OID.
    pub fn empty() -> Self {
        Self {
            arcs: SmallVec::new(),
        }
    }

    /// Create an OID from arc values.
    ///
    /// ```
    /// use snmp_codec::oid::Oid;
    ///
    /// let oid = Oid::new([1, 3, 6, 1]);
    /// assert_eq!(oid.len(), 4);
    /// ```
    pub fn new(arcs: impl IntoIterator<Item = u32>) -> Self {
        Self {
            arcs: arcs.into_iter().collect(),
        }
    }

    /// Create an OID from a slice of arcs.
    pub fn from_slice(arcs: &[u32]) -> Self {
        Self {
            arcs: SmallVec::from_slice(arcs),
        }
    }

    /// Parse an OID from dotted string notation (e.g., "1.3.6.1.2.1.1.1.0").
    ///
    /// Leading and trailing dots are ignored. Every remaining segment must be
    /// a non-negative decimal number that fits in 32 bits.
    ///
    /// This does not check the arc constraints the encoder enforces; see
    /// [`to_ber()`](Self::to_ber).
    ///
    /// # Examples
    ///
    /// ```
    /// use snmp_codec::oid::Oid;
    ///
    /// let oid = Oid::parse(".1.3.6.1.2.1.").unwrap();
    /// assert_eq!(oid.arcs(), &[1, 3, 6, 1, 2, 1]);
    ///
    /// assert!(Oid::parse("1.3.six.1").is_err());
    /// assert!(Oid::parse("1..3").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self> {
        let trimmed = s.trim_matches('.');

        let arcs = trimmed
            .split('.')
            .map(|part| {
                // u32::from_str accepts a leading '+', which is not an arc.
                if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
                    return None;
                }
                part.parse::<u32>().ok()
            })
            .collect::<Option<SmallVec<[u32; 16]>>>()
            .ok_or_else(|| Error::invalid_oid_with_input(OidErrorKind::InvalidArc, s))?;

        Ok(Self { arcs })
    }

    /// Get the arc values.
    pub fn arcs(&self) -> &[u32] {
        &self.arcs
    }

    /// Get the number of arcs.
    pub fn len(&self) -> usize {
        self.arcs.len()
    }

    /// Check if the OID is empty.
    pub fn is_empty(&self) -> bool {
        self.arcs.is_empty()
    }

    /// Check if this OID lies in the subtree rooted at `other`.
    ///
    /// Comparison is arc by arc, so `1.3.6.1.20` is not under `1.3.6.1.2`.
    ///
    /// ```
    /// use snmp_codec::oid;
    ///
    /// let sys_descr = oid!(1, 3, 6, 1, 2, 1, 1, 1, 0);
    /// assert!(sys_descr.starts_with(&oid!(1, 3, 6, 1, 2, 1, 1)));
    /// assert!(!oid!(1, 3, 6, 1, 20).starts_with(&oid!(1, 3, 6, 1, 2)));
    /// ```
    pub fn starts_with(&self, other: &Oid) -> bool {
        self.arcs.len() >= other.arcs.len() && self.arcs[..other.arcs.len()] == other.arcs[..]
    }

    /// Get the parent OID (all arcs except the last).
    ///
    /// Returns `None` if the OID is empty.
    pub fn parent(&self) -> Option<Oid> {
        let (_, rest) = self.arcs.split_last()?;
        Some(Oid::from_slice(rest))
    }

    /// Create a child OID by appending an arc.
    pub fn child(&self, arc: u32) -> Oid {
        let mut arcs = self.arcs.clone();
        arcs.push(arc);
        Oid { arcs }
    }

    /// Check the constraints the encoder places on the root arcs.
    ///
    /// - at least two arcs
    /// - arc1 must be at most 6
    /// - arc2 must be below 40, whatever arc1 is
    /// - `40 * arc1 + arc2` must fit in the single root octet
    pub fn validate(&self) -> Result<()> {
        let &[first, second, ..] = self.arcs.as_slice() else {
            return Err(Error::invalid_oid(OidErrorKind::TooShort));
        };

        if first > MAX_FIRST_ARC {
            return Err(Error::invalid_oid(OidErrorKind::InvalidFirstArc(first)));
        }

        // X.690 allows larger arc2 under arc1 = 2, but a multi-octet root
        // subidentifier would not survive the single-octet decoder.
        if second >= 40 {
            return Err(Error::invalid_oid(OidErrorKind::InvalidSecondArc {
                first,
                second,
            }));
        }

        if first * 40 + second > u8::MAX as u32 {
            return Err(Error::invalid_oid(OidErrorKind::RootOverflow {
                first,
                second,
            }));
        }

        Ok(())
    }

    /// Encode to BER content octets (no tag or length).
    ///
    /// # Examples
    ///
    /// ```
    /// use snmp_codec::oid;
    ///
    /// assert_eq!(oid!(1, 3, 6, 1).to_ber().unwrap(), vec![0x2B, 0x06, 0x01]);
    /// assert!(oid!(1).to_ber().is_err());
    /// assert!(oid!(1, 40).to_ber().is_err());
    /// ```
    pub fn to_ber(&self) -> Result<Vec<u8>> {
        self.validate()?;

        let mut out = Vec::with_capacity(self.arcs.len() + 4);
        out.push((self.arcs[0] * 40 + self.arcs[1]) as u8);
        for &arc in &self.arcs[2..] {
            marshal_base128(arc as u64, &mut out);
        }
        Ok(out)
    }

    /// Decode from BER content octets.
    ///
    /// The first octet always yields two arcs (`byte / 40`, `byte % 40`);
    /// the rest are base-128 subidentifiers read until the input is used up.
    /// Enforces [`MAX_OID_LEN`] per RFC 2578 Section 3.5.
    pub fn from_ber(data: &[u8]) -> Result<Self> {
        let Some(&root) = data.first() else {
            tracing::debug!(target: "snmp_codec::ber", { kind = %DecodeErrorKind::EmptyOid }, "empty OID");
            return Err(Error::decode(0, DecodeErrorKind::EmptyOid));
        };

        let mut arcs: SmallVec<[u32; 16]> = SmallVec::new();
        arcs.push(root as u32 / 40);
        arcs.push(root as u32 % 40);

        let mut offset = 1;
        while offset < data.len() {
            let (value, next) = parse_base128(data, offset)?;
            let arc = u32::try_from(value).map_err(|_| {
                tracing::debug!(target: "snmp_codec::ber", { snmp.offset = offset, value }, "OID arc exceeds 32 bits");
                Error::decode(offset, DecodeErrorKind::IntegerOverflow)
            })?;
            arcs.push(arc);
            offset = next;

            if arcs.len() > MAX_OID_LEN {
                tracing::debug!(target: "snmp_codec::ber", { snmp.offset = offset, count = arcs.len() }, "OID has too many arcs");
                return Err(Error::decode(
                    offset,
                    DecodeErrorKind::OidTooLong {
                        count: arcs.len(),
                        max: MAX_OID_LEN,
                    },
                ));
            }
        }

        Ok(Self { arcs })
    }
}

/// Join arcs with `.` separators, without a leading dot.
pub fn oid_to_string(arcs: &[u32]) -> String {
    Oid::from_slice(arcs).to_string()
}

/// Parse a dotted-decimal OID into its arcs.
pub fn string_to_oid(s: &str) -> Result<Oid> {
    Oid::parse(s)
}

/// Encode a sequence of arcs to BER content octets.
pub fn marshal_object_identifier(arcs: &[u32]) -> Result<Vec<u8>> {
    Oid::from_slice(arcs).to_ber()
}

/// Encode a dotted-decimal OID string to BER content octets.
///
/// ```
/// use snmp_codec::marshal_oid;
///
/// assert_eq!(marshal_oid(".1.3.6.1.2.1").unwrap(), vec![0x2B, 6, 1, 2, 1]);
/// ```
pub fn marshal_oid(s: &str) -> Result<Vec<u8>> {
    string_to_oid(s)?.to_ber()
}

/// Decode BER content octets into a sequence of arcs.
pub fn parse_object_identifier(data: &[u8]) -> Result<Oid> {
    Oid::from_ber(data)
}

impl fmt::Debug for Oid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Oid({})", self)
    }
}

impl fmt::Display for Oid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for arc in &self.arcs {
            if !first {
                write!(f, ".")?;
            }
            write!(f, "{}", arc)?;
            first = false;
        }
        Ok(())
    }
}

impl std::str::FromStr for Oid {
    type Err = crate::error::Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl From<&[u32]> for Oid {
    fn from(arcs: &[u32]) -> Self {
        Self::from_slice(arcs)
    }
}

impl<const N: usize> From<[u32; N]> for Oid {
    fn from(arcs: [u32; N]) -> Self {
        Self::new(arcs)
    }
}

impl PartialOrd for Oid {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Oid {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.arcs.cmp(&other.arcs)
    }
}

/// Macro to create an OID from literal arcs.
///
/// ```
/// use snmp_codec::oid;
///
/// let sys_descr = oid!(1, 3, 6, 1, 2, 1, 1, 1, 0);
/// assert_eq!(sys_descr.to_string(), "1.3.6.1.2.1.1.1.0");
/// ```
#[macro_export]
macro_rules! oid {
    ($($arc:expr),* $(,)?) => {
        $crate::oid::Oid::from_slice(&[$($arc),*])
    };
}
