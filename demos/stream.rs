//! Extracts every run of '0'/'1' from stdin (or from the arguments, if any)
//! and prints what the array looks like.
//!
//! ```text
//! $ echo "101a0101 zz 1111" | cargo run --example stream
//! ```

use light_bitarray::BitArray;
use std::io::{self, BufRead, Cursor};

fn report(bits: &BitArray<u8>) {
    println!(
        "{bits} len={} ones={} shl1={} shr1={} inverted={}",
        bits.len(),
        bits.popcount(),
        bits << 1,
        bits >> 1,
        !bits,
    );
}

fn extract_all<R: BufRead>(reader: &mut R) -> io::Result<()> {
    let mut bits = BitArray::<u8>::new();
    loop {
        if bits.read_from(reader)? {
            report(&bits);
            continue;
        }
        // nothing extracted: drop the offending byte, stop at end of input
        if reader.fill_buf()?.is_empty() {
            return Ok(());
        }
        reader.consume(1);
    }
}

fn main() -> io::Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() {
        return extract_all(&mut io::stdin().lock());
    }

    for arg in &args {
        match arg.parse::<BitArray<u8>>() {
            Ok(bits) => report(&bits),
            Err(err) => {
                eprintln!("{arg}: {err}");
                extract_all(&mut Cursor::new(arg.as_bytes()))?;
            }
        }
    }
    Ok(())
}
