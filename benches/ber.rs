//! BER encoding/decoding benchmarks.
//!
//! Covers the codec paths every decoded varbind goes through.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use snmp_codec::ber::length::{marshal_length, parse_length};
use snmp_codec::oid::Oid;
use snmp_codec::{decode_value, marshal_oid, parse_raw_field};
use std::hint::black_box;

/// Common OIDs used in benchmarks
fn common_oids() -> Vec<(&'static str, Oid)> {
    vec![
        ("sysDescr", Oid::from_slice(&[1, 3, 6, 1, 2, 1, 1, 1, 0])),
        ("sysUpTime", Oid::from_slice(&[1, 3, 6, 1, 2, 1, 1, 3, 0])),
        (
            "ifIndex",
            Oid::from_slice(&[1, 3, 6, 1, 2, 1, 2, 2, 1, 1, 1]),
        ),
        (
            "long_oid",
            Oid::from_slice(&[1, 3, 6, 1, 4, 1, 9, 9, 42, 1, 2, 3, 4, 5, 6, 7]),
        ),
    ]
}

/// Benchmark OID BER encoding
fn bench_oid_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("oid_encode");

    for (name, oid) in common_oids() {
        group.bench_with_input(BenchmarkId::new("to_ber", name), &oid, |b, oid| {
            b.iter(|| black_box(oid.to_ber().unwrap()))
        });

        let s = oid.to_string();
        group.bench_with_input(BenchmarkId::new("marshal_oid", name), &s, |b, s| {
            b.iter(|| black_box(marshal_oid(s).unwrap()))
        });
    }

    group.finish();
}

/// Benchmark OID BER decoding
fn bench_oid_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("oid_decode");

    for (name, oid) in common_oids() {
        let encoded = oid.to_ber().unwrap();
        group.bench_with_input(BenchmarkId::new("from_ber", name), &encoded, |b, data| {
            b.iter(|| black_box(Oid::from_ber(data).unwrap()))
        });
    }

    group.finish();
}

/// Benchmark OID parsing from string
fn bench_oid_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("oid_parse");

    let oid_strings = [
        ("short", "1.3.6.1"),
        ("medium", "1.3.6.1.2.1.1.1.0"),
        ("long", "1.3.6.1.4.1.9.9.42.1.2.3.4.5.6.7.8.9.10"),
    ];

    for (name, s) in oid_strings {
        group.bench_with_input(BenchmarkId::new("parse", name), s, |b, s| {
            b.iter(|| black_box(Oid::parse(s).unwrap()))
        });
    }

    group.finish();
}

/// Benchmark typed value decoding
fn bench_value_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("value_decode");

    let mut long_string = vec![0x04, 0x81, 0xC8];
    long_string.extend(std::iter::repeat_n(b'x', 200));

    let values: Vec<(&str, Vec<u8>)> = vec![
        ("integer", vec![0x02, 0x01, 0x05]),
        ("octet_string_short", b"\x04\x05Linux".to_vec()),
        ("octet_string_200", long_string),
        ("octet_string_binary", vec![0x04, 0x06, 0x00, 0x1A, 0x2B, 0x3C, 0x4D, 0x5E]),
        ("oid", vec![0x06, 0x08, 0x2B, 0x06, 0x01, 0x02, 0x01, 0x01, 0x01, 0x00]),
        ("ip_address", vec![0x40, 0x04, 0xC0, 0xA8, 0x00, 0x01]),
        ("counter32", vec![0x41, 0x05, 0x00, 0xFF, 0xFF, 0xFF, 0xFF]),
        ("counter64", vec![0x46, 0x08, 0x7F, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF]),
        ("no_such_object", vec![0x80, 0x00]),
    ];

    for (name, data) in &values {
        group.bench_with_input(BenchmarkId::new("decode_value", name), data, |b, data| {
            b.iter(|| black_box(decode_value(data).unwrap()))
        });
    }

    group.finish();
}

/// Benchmark raw field parsing
fn bench_raw_field(c: &mut Criterion) {
    let mut group = c.benchmark_group("raw_field");

    let fields: Vec<(&str, Vec<u8>)> = vec![
        ("integer_fast", vec![0x02, 0x01, 0x2A]),
        ("integer_wide", vec![0x02, 0x04, 0x12, 0x34, 0x56, 0x78]),
        ("octet_string", b"\x04\x06public".to_vec()),
        ("oid", vec![0x06, 0x08, 0x2B, 0x06, 0x01, 0x02, 0x01, 0x01, 0x03, 0x00]),
    ];

    for (name, data) in &fields {
        group.bench_with_input(BenchmarkId::new("parse_raw_field", name), data, |b, data| {
            b.iter(|| black_box(parse_raw_field(data).unwrap()))
        });
    }

    group.finish();
}

/// Benchmark length encoding and decoding
fn bench_length(c: &mut Criterion) {
    let mut group = c.benchmark_group("length");

    for n in [5i64, 200, 70_000] {
        group.bench_with_input(BenchmarkId::new("marshal", n), &n, |b, &n| {
            b.iter(|| black_box(marshal_length(n).unwrap()))
        });

        let mut data = vec![0x30];
        data.extend_from_slice(&marshal_length(n).unwrap());
        data.push(0x00);
        group.bench_with_input(BenchmarkId::new("parse", n), &data, |b, data| {
            b.iter(|| black_box(parse_length(data).unwrap()))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_oid_encode,
    bench_oid_decode,
    bench_oid_parse,
    bench_value_decode,
    bench_raw_field,
    bench_length,
);

criterion_main!(benches);
