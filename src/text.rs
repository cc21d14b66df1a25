//! Canonical `'0'`/`'1'` text form.

use core::fmt::{Display, Formatter, Write};
use core::str::FromStr;

use crate::bitarray::BitArray;
use crate::block::Block;
use crate::error::BitArrayError;

/// Writes one `'0'` or `'1'` per bit in index order, with no separators.
///
/// # Examples
/// ```
/// use light_bitarray::BitArray;
///
/// let bits = BitArray::<u8>::from_slice(&[true, false, true, true]);
/// assert_eq!(bits.to_string(), "1011");
/// assert_eq!(BitArray::<u8>::new().to_string(), "");
/// ```
impl<B: Block> Display for BitArray<B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        for idx in 0..self.len {
            f.write_char(if self.read_bit(idx) { '1' } else { '0' })?;
        }
        Ok(())
    }
}

/// Parses a string made only of `'0'` and `'1'`, one bit per character.
///
/// The empty string parses to an empty array.
///
/// # Errors
/// Returns [`BitArrayError::InvalidFormat`] naming the first character that
/// is neither `'0'` nor `'1'`.
///
/// # Examples
/// ```
/// use light_bitarray::{BitArray, BitArrayError};
///
/// let bits: BitArray = "0110".parse().unwrap();
/// assert_eq!(bits.len(), 4);
///
/// let err = "01x".parse::<BitArray>().unwrap_err();
/// assert_eq!(err, BitArrayError::InvalidFormat { position: 2, found: 'x' });
/// ```
impl<B: Block> FromStr for BitArray<B> {
    type Err = BitArrayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some((position, found)) = s.char_indices().find(|&(_, c)| c != '0' && c != '1') {
            return Err(BitArrayError::InvalidFormat { position, found });
        }

        // only ASCII is left, so bytes and characters line up
        let mut array = Self::with_len(s.len());
        for (idx, byte) in s.bytes().enumerate() {
            if byte == b'1' {
                array.assign_bit(idx, true);
            }
        }
        Ok(array)
    }
}

impl<B: Block> TryFrom<&str> for BitArray<B> {
    type Error = BitArrayError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}
