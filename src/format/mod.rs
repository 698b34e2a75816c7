//! Formatting utilities for raw SNMP data.
//!
//! ## Hex Encoding
//!
//! The [`hex`] module provides hexadecimal encoding and decoding, the
//! space-separated rendering used for binary OCTET STRING values, and lazy
//! dumps for trace logging.
//!
//! ```
//! use snmp_codec::format::hex;
//!
//! // Encode bytes to hex string
//! assert_eq!(hex::encode(&[0xde, 0xad, 0xbe, 0xef]), "deadbeef");
//! assert_eq!(hex::spaced(&[0xde, 0xad]), "de ad");
//!
//! // Lazy formatting for logging
//! let data = [0x02, 0x01, 0x05];
//! tracing::trace!(data = %hex::Dump(&data), "received");
//! ```

pub mod hex;
