//! Stream insertion and extraction over `std::io`.

use std::io::{self, BufRead, ErrorKind, Write};

use crate::bitarray::BitArray;
use crate::block::Block;

impl<B: Block> BitArray<B> {
    /// Writes the `'0'`/`'1'` text of the array to `writer`, exactly
    /// [`len`](BitArray::len) bytes with no terminator.
    ///
    /// # Errors
    /// Propagates any error returned by `writer`.
    ///
    /// # Examples
    /// ```
    /// use light_bitarray::BitArray;
    ///
    /// let bits: BitArray = "1101".parse().unwrap();
    /// let mut out = Vec::new();
    /// bits.write_to(&mut out).unwrap();
    /// assert_eq!(out, b"1101");
    /// ```
    pub fn write_to<W: Write + ?Sized>(&self, writer: &mut W) -> io::Result<()> {
        write!(writer, "{self}")
    }

    /// Reads the longest run of `'0'`/`'1'` bytes from `reader` and replaces
    /// `self` with it.
    ///
    /// Reading stops at the first byte that is not `'0'` or `'1'`, whitespace
    /// included; that byte is left in `reader`, so the reader ends up
    /// positioned right after the run.
    ///
    /// Returns `Ok(false)` if no bit could be read, in which case `self` is
    /// left unchanged. This is a soft failure: unlike parsing a string, a
    /// malformed stream never yields [`BitArrayError`](crate::BitArrayError).
    ///
    /// # Errors
    /// Propagates any error returned by `reader`, except
    /// [`ErrorKind::Interrupted`], which is retried.
    ///
    /// # Examples
    /// ```
    /// use light_bitarray::BitArray;
    /// use std::io::{BufRead, Cursor};
    ///
    /// let mut input = Cursor::new("101a0101");
    /// let mut bits = BitArray::<u8>::new();
    ///
    /// assert!(bits.read_from(&mut input).unwrap());
    /// assert_eq!(bits.to_string(), "101");
    ///
    /// input.consume(1); // skip the 'a'
    /// assert!(bits.read_from(&mut input).unwrap());
    /// assert_eq!(bits.to_string(), "0101");
    ///
    /// assert!(!bits.read_from(&mut input).unwrap());
    /// assert_eq!(bits.to_string(), "0101");
    /// ```
    pub fn read_from<R: BufRead + ?Sized>(&mut self, reader: &mut R) -> io::Result<bool> {
        let mut parsed = Self::new();
        consume_while(
            reader,
            |byte| byte == b'0' || byte == b'1',
            |run| parsed.extend(run.iter().map(|&byte| byte == b'1')),
        )?;

        if parsed.is_empty() {
            return Ok(false);
        }
        *self = parsed;
        Ok(true)
    }
}

/// Consumes bytes from `reader` while `accept` holds, handing each accepted
/// run to `sink`. The first rejected byte stays in the reader.
fn consume_while<R, A, S>(reader: &mut R, mut accept: A, mut sink: S) -> io::Result<()>
where
    R: BufRead + ?Sized,
    A: FnMut(u8) -> bool,
    S: FnMut(&[u8]),
{
    loop {
        let available = match reader.fill_buf() {
            Ok(available) => available,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        if available.is_empty() {
            return Ok(());
        }

        let run = available.iter().take_while(|&&byte| accept(byte)).count();
        sink(&available[..run]);
        let stopped = run < available.len();
        reader.consume(run);
        if stopped {
            return Ok(());
        }
    }
}
