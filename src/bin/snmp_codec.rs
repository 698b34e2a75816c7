//! snmp-codec: Decode and encode SNMP BER fields from the command line.

use clap::{Parser, Subcommand};
use snmp_codec::ber::raw::{RawField, parse_raw_field};
use snmp_codec::ber::tag::universal;
use snmp_codec::cli::args::{OutputArgs, parse_hex_string};
use snmp_codec::format::hex;
use snmp_codec::{decode_value, marshal_length, marshal_oid};
use std::process::ExitCode;

/// Decode and encode SNMP BER fields.
#[derive(Debug, Parser)]
#[command(name = "snmp-codec", version, about)]
struct Args {
    #[command(flatten)]
    output: OutputArgs,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Decode typed values from hex-encoded TLVs.
    Decode {
        #[arg(required = true, value_name = "HEX")]
        fields: Vec<String>,
    },
    /// Parse raw INTEGER, OCTET STRING or OBJECT IDENTIFIER fields.
    Raw {
        #[arg(required = true, value_name = "HEX")]
        fields: Vec<String>,
    },
    /// Encode dotted-decimal OIDs as OBJECT IDENTIFIER TLVs.
    EncodeOid {
        #[arg(required = true, value_name = "OID")]
        oids: Vec<String>,
    },
    /// Encode TLV length octets.
    EncodeLength {
        #[arg(required = true, value_name = "N", allow_negative_numbers = true)]
        lengths: Vec<i64>,
    },
}

fn main() -> ExitCode {
    let args = Args::parse();

    args.output.init_tracing();

    // Each input is handled on its own; one bad field does not stop the rest.
    let results: Vec<Result<String, String>> = match &args.command {
        Command::Decode { fields } => fields.iter().map(|s| run_decode(s)).collect(),
        Command::Raw { fields } => fields.iter().map(|s| run_raw(s)).collect(),
        Command::EncodeOid { oids } => oids.iter().map(|s| run_encode_oid(s)).collect(),
        Command::EncodeLength { lengths } => {
            lengths.iter().map(|&n| run_encode_length(n)).collect()
        }
    };

    let mut status = ExitCode::SUCCESS;
    for result in results {
        match result {
            Ok(line) => println!("{}", line),
            Err(e) => {
                eprintln!("Error: {}", e);
                status = ExitCode::FAILURE;
            }
        }
    }
    status
}

fn run_decode(input: &str) -> Result<String, String> {
    let data = parse_hex_string(input)?;
    let value = decode_value(&data).map_err(|e| e.to_string())?;
    Ok(value.to_string())
}

fn run_raw(input: &str) -> Result<String, String> {
    let data = parse_hex_string(input)?;
    let (field, consumed) = parse_raw_field(&data).map_err(|e| e.to_string())?;
    let rendered = match field {
        RawField::Integer(v) => format!("Integer: {}", v),
        RawField::OctetString(bytes) => format!("OctetString: {}", hex::spaced(&bytes)),
        RawField::ObjectIdentifier(oid) => format!("ObjectIdentifier: {}", oid),
    };
    Ok(format!("{} ({} bytes)", rendered, consumed))
}

fn run_encode_oid(input: &str) -> Result<String, String> {
    let content = marshal_oid(input).map_err(|e| e.to_string())?;
    let length = marshal_length(content.len() as i64).map_err(|e| e.to_string())?;

    let mut tlv = Vec::with_capacity(1 + length.len() + content.len());
    tlv.push(universal::OBJECT_IDENTIFIER);
    tlv.extend_from_slice(&length);
    tlv.extend_from_slice(&content);
    Ok(format!("{}\t{}", input, hex::spaced(&tlv)))
}

fn run_encode_length(n: i64) -> Result<String, String> {
    let octets = marshal_length(n).map_err(|e| e.to_string())?;
    Ok(format!("{}\t{}", n, hex::spaced(&octets)))
}
