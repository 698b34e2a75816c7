//! Hexadecimal encoding, decoding and trace dumps.

use std::fmt;

/// Maximum number of bytes shown by [`Dump`].
pub const DUMP_LIMIT: usize = 16;

/// Bytes of leading context shown by [`Row`].
const ROW_CONTEXT: usize = 4;

/// Maximum number of bytes shown by [`Row`].
const ROW_LIMIT: usize = 31;

/// Encode bytes as lowercase hex string.
///
/// # Examples
///
/// ```
/// use snmp_codec::format::hex::encode;
///
/// assert_eq!(encode(&[0xde, 0xad, 0xbe, 0xef]), "deadbeef");
/// assert_eq!(encode(&[0x00, 0xff]), "00ff");
/// ```
pub fn encode(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}

/// Encode bytes as space-separated lowercase hex pairs.
///
/// This is the rendering used for OCTET STRING values that are not text.
///
/// ```
/// use snmp_codec::format::hex::spaced;
///
/// assert_eq!(spaced(&[0x00, 0x1a, 0x2b]), "00 1a 2b");
/// ```
pub fn spaced(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 3);
    for (i, b) in bytes.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push_str(&format!("{:02x}", b));
    }
    out
}

/// Decode hex string to bytes.
///
/// Whitespace between pairs is not accepted; strip it first.
///
/// ```
/// use snmp_codec::format::hex::decode;
///
/// assert_eq!(decode("deadbeef").unwrap(), vec![0xde, 0xad, 0xbe, 0xef]);
/// assert_eq!(decode("00FF").unwrap(), vec![0x00, 0xff]);
/// assert!(decode("xyz").is_err());
/// assert!(decode("abc").is_err()); // odd length
/// ```
pub fn decode(s: &str) -> Result<Vec<u8>, DecodeError> {
    let digits = s.as_bytes();
    if !digits.len().is_multiple_of(2) {
        return Err(DecodeError::OddLength);
    }
    digits
        .chunks_exact(2)
        .map(|pair| {
            let hi = (pair[0] as char).to_digit(16).ok_or(DecodeError::InvalidChar)?;
            let lo = (pair[1] as char).to_digit(16).ok_or(DecodeError::InvalidChar)?;
            Ok((hi * 16 + lo) as u8)
        })
        .collect()
}

/// Error type for hex decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// Input has odd length (must be pairs of hex digits)
    OddLength,
    /// Invalid hexadecimal character
    InvalidChar,
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OddLength => write!(f, "odd number of hex digits"),
            Self::InvalidChar => write!(f, "invalid hex digit"),
        }
    }
}

impl std::error::Error for DecodeError {}

/// Lazy Wireshark-style dump for trace logging.
///
/// Shows at most [`DUMP_LIMIT`] bytes, 8 per row, each row prefixed by its
/// offset. Nothing is formatted unless the event is actually recorded.
///
/// ```
/// use snmp_codec::format::hex::Dump;
///
/// let dump = Dump(&[0x02, 0x01, 0x05]).to_string();
/// assert_eq!(dump, "\n  0  02 01 05");
/// ```
pub struct Dump<'a>(pub &'a [u8]);

impl fmt::Display for Dump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, b) in self.0.iter().take(DUMP_LIMIT).enumerate() {
            if i % 8 == 0 {
                write!(f, "\n{:3} ", i)?;
            }
            write!(f, " {:02x}", b)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Dump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

/// Lazy single-row dump around a position of interest.
///
/// Starts a few bytes before `cursor` for context and stops after
/// about a screen width of bytes.
///
/// ```
/// use snmp_codec::format::hex::Row;
///
/// let data = [0x30, 0x0c, 0x02, 0x01, 0x00, 0x04, 0x06];
/// assert_eq!(Row::new(&data, 6).to_string(), "02 01 00 04 06");
/// ```
pub struct Row<'a> {
    data: &'a [u8],
    start: usize,
}

impl<'a> Row<'a> {
    pub fn new(data: &'a [u8], cursor: usize) -> Self {
        let start = cursor.saturating_sub(ROW_CONTEXT).min(data.len());
        Self { data, start }
    }
}

impl fmt::Display for Row<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, b) in self.data[self.start..].iter().take(ROW_LIMIT).enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{:02x}", b)?;
        }
        Ok(())
    }
}
