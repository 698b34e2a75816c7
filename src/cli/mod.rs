//! CLI support for the `snmp-codec` binary.

pub mod args;
