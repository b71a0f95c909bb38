//! Benchmark for the SECS-II codec over a synthetic equipment report.
//!
//! Usage: `cargo run --release -p secs2-bench -- [reports] [variables]`

use std::time::Instant;

use secs2::{ListBuilder, Message, Value, encode_value};

const DEFAULT_REPORTS: usize = 2_000;
const DEFAULT_VARIABLES: usize = 24;

/// Builds an S6F11-style event report: one list per report, each carrying a
/// report id and a list of variables of mixed types.
fn build_event_report(reports: usize, variables: usize) -> Value {
    let mut root = ListBuilder::new().u4(vec![1]).u4(vec![4001]);

    for r in 0..reports {
        root = root.list(|report| {
            let mut report = report.u4(vec![r as u32]);
            for v in 0..variables {
                report = match v % 6 {
                    0 => report.ascii(format!("SV{:04}-chamber-{}", v, r % 8)),
                    1 => report.f8(vec![r as f64 * 0.125, v as f64 * 1.5]),
                    2 => report.u2(vec![(r % 65_536) as u16; 4]),
                    3 => report.boolean(vec![r % 2 == 0, v % 3 == 0]),
                    4 => report.i4(vec![-(r as i32), v as i32, 0]),
                    _ => report.binary(vec![(r % 256) as u8; 16]),
                };
            }
            report
        });
    }

    root.build()
}

fn count_nodes(value: &Value) -> (usize, usize) {
    let mut lists = 0;
    let mut items = 0;
    let mut stack = vec![value];
    while let Some(node) = stack.pop() {
        match node {
            Value::List(list) => {
                lists += 1;
                stack.extend(list.iter());
            }
            Value::Item(_) => items += 1,
        }
    }
    (lists, items)
}

fn mb_per_sec(bytes: usize, secs: f64) -> f64 {
    (bytes as f64 / 1_000_000.0) / secs
}

fn main() {
    let mut args = std::env::args().skip(1);
    let reports = args
        .next()
        .and_then(|a| a.parse().ok())
        .unwrap_or(DEFAULT_REPORTS);
    let variables = args
        .next()
        .and_then(|a| a.parse().ok())
        .unwrap_or(DEFAULT_VARIABLES);

    println!(
        "Building event report: {} reports x {} variables",
        reports, variables
    );

    let build_start = Instant::now();
    let value = build_event_report(reports, variables);
    let build_time = build_start.elapsed();

    let (lists, items) = count_nodes(&value);
    println!("Built in {:?}", build_time);
    println!("  - {} lists, {} items", lists, items);

    // Encoding
    let encode_start = Instant::now();
    let encoded = encode_value(&value).expect("Failed to encode");
    let encode_time = encode_start.elapsed();

    println!("\nEncode: {} bytes in {:?}", encoded.len(), encode_time);
    println!(
        "  Throughput: {:.2} MB/s",
        mb_per_sec(encoded.len(), encode_time.as_secs_f64())
    );

    // Decoding
    let decode_start = Instant::now();
    let (message, consumed) = Message::from_bytes(&encoded).expect("Failed to decode");
    let decode_time = decode_start.elapsed();

    println!("\nDecode: {} bytes in {:?}", consumed, decode_time);
    println!(
        "  Throughput: {:.2} MB/s",
        mb_per_sec(consumed, decode_time.as_secs_f64())
    );
    println!(
        "  Speedup vs encode: {:.1}x",
        encode_time.as_secs_f64() / decode_time.as_secs_f64()
    );

    assert_eq!(consumed, encoded.len(), "Decoder should consume every byte");
    assert!(
        *message.value() == value,
        "Decoded tree should match the input"
    );

    // SML rendering
    let sml_start = Instant::now();
    let sml = message.to_sml(secs2::limits::DEFAULT_INDENT_WIDTH);
    let sml_time = sml_start.elapsed();

    println!("\nSML: {} bytes in {:?}", sml.len(), sml_time);
    println!(
        "  Throughput: {:.2} MB/s (text)",
        mb_per_sec(sml.len(), sml_time.as_secs_f64())
    );
    println!(
        "  Expansion vs wire: {:.1}x",
        sml.len() as f64 / encoded.len() as f64
    );

    println!("\n=== Summary ===");
    println!("Nodes: {}", lists + items);
    println!("Wire size: {} bytes", encoded.len());
    println!(
        "Bytes per node: {:.2}",
        encoded.len() as f64 / (lists + items) as f64
    );
    println!(
        "Encode: {:.2} ms, Decode: {:.2} ms, SML: {:.2} ms",
        encode_time.as_secs_f64() * 1000.0,
        decode_time.as_secs_f64() * 1000.0,
        sml_time.as_secs_f64() * 1000.0
    );
}
