//! Simple decoder to inspect files of raw SECS-II message bodies.
//!
//! Usage: `cargo run --example decode_file -- <path> [indent-width]`

use std::fs;

use secs2::{FormatType, Message, Value, decode_message};

fn count_nodes(value: &Value, counts: &mut [usize; FormatType::ALL.len()]) {
    let mut stack = vec![value];
    while let Some(node) = stack.pop() {
        if let Some(i) = FormatType::ALL.iter().position(|f| *f == node.format_type()) {
            counts[i] += 1;
        }
        if let Value::List(list) = node {
            stack.extend(list.iter());
        }
    }
}

fn main() {
    let mut args = std::env::args().skip(1);
    let path = args.next().unwrap_or_else(|| "message.secs2".to_string());
    let indent_width = args
        .next()
        .and_then(|w| w.parse().ok())
        .unwrap_or(secs2::limits::DEFAULT_INDENT_WIDTH);

    println!("Reading: {}", path);

    let data = fs::read(&path).expect("Failed to read file");
    println!("File size: {} bytes", data.len());

    let mut offset = 0;
    let mut messages: Vec<Message> = Vec::new();
    while offset < data.len() {
        match decode_message(&data[offset..]) {
            Ok((msg, consumed)) => {
                println!(
                    "\n=== Message {} (offset {}, {} bytes) ===",
                    messages.len() + 1,
                    offset,
                    consumed
                );
                println!("{:width$}", msg, width = indent_width);
                offset += consumed;
                messages.push(msg);
            }
            Err(err) => {
                println!("\nDecode failed at offset {}: {} ({:?})", offset, err, err.code());
                break;
            }
        }
    }

    let mut counts = [0usize; FormatType::ALL.len()];
    for msg in &messages {
        count_nodes(msg.value(), &mut counts);
    }

    println!("\n=== Summary ===");
    println!("Messages: {}", messages.len());
    println!("Bytes decoded: {} of {}", offset, data.len());
    for (format, count) in FormatType::ALL.iter().zip(counts) {
        if count > 0 {
            println!("  {:<8} {}", format.name(), count);
        }
    }
}
