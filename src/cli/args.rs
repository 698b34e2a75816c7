//! Command-line argument structures for the `snmp-codec` tool.

use clap::Parser;

use crate::format::hex;

/// Logging control arguments.
#[derive(Debug, Parser)]
pub struct OutputArgs {
    /// Enable debug logging (snmp_codec=debug).
    #[arg(short = 'd', long = "debug", global = true)]
    pub debug: bool,

    /// Enable trace logging (snmp_codec=trace).
    #[arg(short = 'D', long = "trace", global = true)]
    pub trace: bool,
}

impl OutputArgs {
    /// The filter directive selected by the flags.
    pub fn filter(&self) -> &'static str {
        if self.trace {
            "snmp_codec=trace"
        } else if self.debug {
            "snmp_codec=debug"
        } else {
            "snmp_codec=warn"
        }
    }

    /// Initialize tracing based on debug/trace flags.
    pub fn init_tracing(&self) {
        use tracing_subscriber::EnvFilter;

        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::new(self.filter()))
            .with_writer(std::io::stderr)
            .try_init();
    }
}

/// Parse a hex string (with or without spaces/separators) into bytes.
///
/// Accepts `0x`-prefixed input and the `de:ad`, `de-ad` and `de ad` forms.
pub fn parse_hex_string(s: &str) -> Result<Vec<u8>, String> {
    let s = s.trim();
    let s = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s);

    let clean: String = s
        .chars()
        .filter(|c| !matches!(c, ' ' | ':' | '-' | '\t'))
        .collect();

    hex::decode(&clean).map_err(|e| format!("invalid hex {:?}: {}", s, e))
}
