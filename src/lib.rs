//! A minimal, growable bit array written in pure Rust.
//! `no_std` with `alloc`, no `unsafe`.
//!
//! [`BitArray`] is the main struct in this library. Its [features](#features)
//! are listed below.
//!
//! # Examples
//! ```
//! use light_bitarray::BitArray;
//!
//! let mut bits: BitArray<u8> = "1010".parse().unwrap();
//! assert_eq!(bits.popcount(), 2);
//! bits.push(true);
//! bits.erase(0, 2).unwrap();
//! assert_eq!(bits.to_string(), "101");
//! assert_eq!(bits.get(2), Ok(true));
//! ```
//!
//! # Use Cases
//!
//! - Compact collections of boolean flags whose length changes at runtime
//! - Bit strings that need insertion, removal and slicing at any position
//! - Does not use word-parallel or SIMD operations; every operation walks the
//!   affected bits one by one, so it is not meant for maxed-out throughput
//!
//! # Features
//!
//! - `#![no_std]` compatible (needs `alloc`)
//! - Generic over the storage block: `BitArray<B: Block = usize>` with `u8`,
//!   `u16`, `u32`, `u64`, `u128` and `usize` blocks
//! - Storage grows one block at a time, so `capacity()` is predictable
//! - Checked single-bit access: `get`, `set`, `toggle`, `bit_mut`
//! - Structural edits: `push`, `append`, `insert`, `insert_bits`, `erase`,
//!   `remove`, `slice`
//! - Bitwise transforms: `toggle_all`, `complement`, `shift_left`,
//!   `shift_right`
//! - Operator support:
//!   - `!`, `<<`, `>>`
//!   - `<<=`, `>>=`, `+=` (append a bit or an array)
//!   - `==`, `<`, `<=`, `>`, `>=` (lexicographic)
//! - Text form: `Display` / `FromStr` with `'0'` and `'1'`
//! - Stream extraction and insertion over `std::io` (feature `std`, on by
//!   default): `read_from`, `write_to`
//! - `serde` support through the text form (feature `serde`)
//!
//! # Errors
//!
//! Fallible operations return [`Result`], carrying a [`BitArrayError`]:
//! [`OutOfRange`](BitArrayError::OutOfRange) for positions past the length and
//! [`InvalidFormat`](BitArrayError::InvalidFormat) for strings containing
//! anything but `'0'` and `'1'`.

#![deny(missing_docs)]
#![forbid(unsafe_code)]
#![no_std]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod bitarray;
mod block;
mod error;
#[cfg(feature = "std")]
mod io;
mod ops;
mod proxy;
#[cfg(feature = "serde")]
mod serdes;
mod text;

pub use bitarray::BitArray;
pub use block::{Block, block_count};
pub use error::{BitArrayError, Result};
pub use proxy::BitRef;
