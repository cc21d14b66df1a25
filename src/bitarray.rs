use alloc::vec;
use alloc::vec::Vec;

use crate::block::{Block, block_count, locate};
use crate::error::{BitArrayError, Result};
use crate::proxy::BitRef;

/// A growable sequence of bits packed into `B` blocks.
///
/// Bit `i` lives in block `i / B::BITS` at offset `i % B::BITS`. Only the
/// first [`len`] bits are part of the array; the remaining bits of the last
/// blocks are spare capacity and may hold stale values after an erase.
///
/// Storage grows by exactly one block whenever a single-bit append or insert
/// runs out of room, so the [`capacity`] after a series of pushes is
/// deterministic. Erasing never releases blocks.
///
/// # Examples
/// ```
/// use light_bitarray::BitArray;
///
/// let mut bits: BitArray<u8> = "0110".parse().unwrap();
/// bits.push(true);
/// bits.insert(0, false).unwrap();
/// assert_eq!(bits.to_string(), "001101");
/// assert_eq!(bits.popcount(), 3);
/// assert_eq!(bits.capacity(), 8);
/// ```
///
/// [`len`]: BitArray::len
/// [`capacity`]: BitArray::capacity
#[derive(Clone)]
pub struct BitArray<B: Block = usize> {
    pub(crate) blocks: Vec<B>,
    pub(crate) len: usize,
}

impl<B: Block> BitArray<B> {
    /// Creates an empty array without allocating.
    ///
    /// # Examples
    /// ```
    /// use light_bitarray::BitArray;
    ///
    /// let bits = BitArray::<u32>::new();
    /// assert!(bits.is_empty());
    /// assert_eq!(bits.capacity(), 0);
    /// ```
    pub const fn new() -> Self {
        Self {
            blocks: Vec::new(),
            len: 0,
        }
    }

    /// Creates an array of `len` unset bits.
    ///
    /// Exactly [`block_count(len)`](crate::block_count) blocks are allocated.
    ///
    /// # Examples
    /// ```
    /// use light_bitarray::BitArray;
    ///
    /// let bits = BitArray::<u8>::with_len(9);
    /// assert_eq!(bits.len(), 9);
    /// assert_eq!(bits.capacity(), 16);
    /// assert_eq!(bits.to_string(), "000000000");
    /// ```
    pub fn with_len(len: usize) -> Self {
        Self {
            blocks: vec![B::ZERO; block_count::<B>(len)],
            len,
        }
    }

    /// Constructs an array from a boolean slice, where `true` means set.
    ///
    /// # Examples
    /// ```
    /// use light_bitarray::BitArray;
    ///
    /// let bits = BitArray::<u8>::from_slice(&[true, false, true]);
    /// assert_eq!(bits.to_string(), "101");
    /// ```
    pub fn from_slice(bits: &[bool]) -> Self {
        let mut array = Self::with_len(bits.len());
        for (idx, bit) in bits.iter().enumerate() {
            if *bit {
                array.assign_bit(idx, true);
            }
        }
        array
    }

    /// Returns the number of bits in the array.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the array holds no bits.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of bits the allocated blocks can hold.
    ///
    /// # Examples
    /// ```
    /// use light_bitarray::BitArray;
    ///
    /// let mut bits = BitArray::<u8>::new();
    /// for _ in 0..9 {
    ///     bits.push(true);
    /// }
    /// assert_eq!(bits.capacity(), 16);
    /// ```
    #[inline]
    pub fn capacity(&self) -> usize {
        self.blocks.len() * B::BITS
    }

    /// Returns the number of set bits.
    ///
    /// # Examples
    /// ```
    /// use light_bitarray::BitArray;
    ///
    /// let bits: BitArray = "011010110".parse().unwrap();
    /// assert_eq!(bits.popcount(), 5);
    /// ```
    pub fn popcount(&self) -> usize {
        (0..self.len).filter(|&idx| self.read_bit(idx)).count()
    }

    /// Returns `true` if at least one bit is set.
    ///
    /// Stops at the first set bit instead of counting all of them.
    pub fn any(&self) -> bool {
        (0..self.len).any(|idx| self.read_bit(idx))
    }

    /// Returns the bit at `idx`.
    ///
    /// # Errors
    /// Returns [`BitArrayError::OutOfRange`] if `idx >= len()`.
    ///
    /// # Examples
    /// ```
    /// use light_bitarray::BitArray;
    ///
    /// let bits: BitArray = "01".parse().unwrap();
    /// assert_eq!(bits.get(1), Ok(true));
    /// assert!(bits.get(2).is_err());
    /// ```
    pub fn get(&self, idx: usize) -> Result<bool> {
        self.check_index("get", idx)?;
        Ok(self.read_bit(idx))
    }

    /// Sets the bit at `idx` to `value`.
    ///
    /// # Errors
    /// Returns [`BitArrayError::OutOfRange`] if `idx >= len()`. Use
    /// [`push`](BitArray::push) to grow the array.
    ///
    /// # Examples
    /// ```
    /// use light_bitarray::BitArray;
    ///
    /// let mut bits = BitArray::<u8>::with_len(3);
    /// bits.set(1, true).unwrap();
    /// assert_eq!(bits.to_string(), "010");
    /// assert!(bits.set(3, true).is_err());
    /// ```
    pub fn set(&mut self, idx: usize, value: bool) -> Result<()> {
        self.check_index("set", idx)?;
        self.assign_bit(idx, value);
        Ok(())
    }

    /// Returns a write-through handle to the bit at `idx`.
    ///
    /// The handle borrows the array mutably, so the array cannot be resized
    /// or otherwise touched until the handle is dropped.
    ///
    /// # Errors
    /// Returns [`BitArrayError::OutOfRange`] if `idx >= len()`.
    ///
    /// # Examples
    /// ```
    /// use light_bitarray::BitArray;
    ///
    /// let mut bits: BitArray = "00".parse().unwrap();
    /// let mut bit = bits.bit_mut(1).unwrap();
    /// bit.set(true);
    /// assert!(bit.get());
    /// assert_eq!(bits.to_string(), "01");
    /// ```
    pub fn bit_mut(&mut self, idx: usize) -> Result<BitRef<'_, B>> {
        self.check_index("bit_mut", idx)?;
        Ok(BitRef::new(self, idx))
    }

    /// Appends a bit, growing the storage by one block if it is full.
    ///
    /// # Examples
    /// ```
    /// use light_bitarray::BitArray;
    ///
    /// let mut bits = BitArray::<u8>::new();
    /// bits.push(true);
    /// bits.push(false);
    /// assert_eq!(bits.to_string(), "10");
    /// assert_eq!(bits.capacity(), 8);
    /// ```
    pub fn push(&mut self, bit: bool) {
        if self.len == self.capacity() {
            self.blocks.push(B::ZERO);
        }
        self.assign_bit(self.len, bit);
        self.len += 1;
    }

    /// Appends every bit of `other`, in order, as if by repeated
    /// [`push`](BitArray::push).
    ///
    /// `other` may use a different block type.
    ///
    /// # Examples
    /// ```
    /// use light_bitarray::BitArray;
    ///
    /// let mut bits: BitArray<u8> = "001".parse().unwrap();
    /// let tail: BitArray<u64> = "0101".parse().unwrap();
    /// bits.append(&tail);
    /// assert_eq!(bits.to_string(), "0010101");
    /// ```
    pub fn append<C: Block>(&mut self, other: &BitArray<C>) {
        for idx in 0..other.len {
            self.push(other.read_bit(idx));
        }
    }

    /// Removes `nbits` bits starting at `pos`, moving the following bits
    /// down. Capacity is kept.
    ///
    /// # Errors
    /// Returns [`BitArrayError::OutOfRange`] if `pos + nbits > len()`.
    ///
    /// # Examples
    /// ```
    /// use light_bitarray::BitArray;
    ///
    /// let mut bits: BitArray = "0100100".parse().unwrap();
    /// bits.erase(6, 1).unwrap();
    /// assert_eq!(bits.to_string(), "010010");
    /// bits.erase(1, 4).unwrap();
    /// assert_eq!(bits.to_string(), "00");
    /// ```
    pub fn erase(&mut self, pos: usize, nbits: usize) -> Result<()> {
        let end = self.check_range("erase", pos, nbits)?;
        for idx in end..self.len {
            self.assign_bit(idx - nbits, self.read_bit(idx));
        }
        self.len -= nbits;
        Ok(())
    }

    /// Removes and returns the bit at `pos`.
    ///
    /// # Errors
    /// Returns [`BitArrayError::OutOfRange`] if `pos >= len()`.
    pub fn remove(&mut self, pos: usize) -> Result<bool> {
        self.check_index("remove", pos)?;
        let bit = self.read_bit(pos);
        self.erase(pos, 1)?;
        Ok(bit)
    }

    /// Inserts `bit` at `pos`, moving the bits at `pos..` up by one.
    ///
    /// `pos == len()` appends.
    ///
    /// # Errors
    /// Returns [`BitArrayError::OutOfRange`] if `pos > len()`.
    ///
    /// # Examples
    /// ```
    /// use light_bitarray::BitArray;
    ///
    /// let mut bits: BitArray = "00".parse().unwrap();
    /// bits.insert(1, true).unwrap();
    /// assert_eq!(bits.to_string(), "010");
    /// bits.insert(3, true).unwrap();
    /// assert_eq!(bits.to_string(), "0101");
    /// ```
    pub fn insert(&mut self, pos: usize, bit: bool) -> Result<()> {
        if pos > self.len {
            return Err(BitArrayError::out_of_range("insert", pos, self.len));
        }
        if self.len == self.capacity() {
            self.blocks.push(B::ZERO);
        }
        for idx in (pos + 1..=self.len).rev() {
            self.assign_bit(idx, self.read_bit(idx - 1));
        }
        self.assign_bit(pos, bit);
        self.len += 1;
        Ok(())
    }

    /// Inserts all bits of `other` at `pos`, moving the bits at `pos..` up by
    /// `other.len()`.
    ///
    /// Grows the storage by as many blocks as needed.
    ///
    /// # Errors
    /// Returns [`BitArrayError::OutOfRange`] if `pos > len()`.
    ///
    /// # Examples
    /// ```
    /// use light_bitarray::BitArray;
    ///
    /// let mut bits: BitArray<u8> = "0010101".parse().unwrap();
    /// let other: BitArray<u8> = "101".parse().unwrap();
    /// bits.insert_bits(3, &other).unwrap();
    /// assert_eq!(bits.to_string(), "0011010101");
    /// ```
    pub fn insert_bits<C: Block>(&mut self, pos: usize, other: &BitArray<C>) -> Result<()> {
        if pos > self.len {
            return Err(BitArrayError::out_of_range("insert_bits", pos, self.len));
        }
        let count = other.len;
        let old_len = self.len;
        let needed = block_count::<B>(old_len + count);
        if needed > self.blocks.len() {
            self.blocks.resize(needed, B::ZERO);
        }
        self.len = old_len + count;

        // move the tail up first, back to front so nothing is overwritten
        for idx in (pos..old_len).rev() {
            self.assign_bit(idx + count, self.read_bit(idx));
        }
        for idx in 0..count {
            self.assign_bit(pos + idx, other.read_bit(idx));
        }
        Ok(())
    }

    /// Returns a new array holding the `count` bits starting at `pos`.
    ///
    /// # Errors
    /// Returns [`BitArrayError::OutOfRange`] if `pos + count > len()`.
    ///
    /// # Examples
    /// ```
    /// use light_bitarray::BitArray;
    ///
    /// let bits: BitArray = "0011100".parse().unwrap();
    /// assert_eq!(bits.slice(2, 4).unwrap().to_string(), "1110");
    /// assert!(bits.slice(5, 3).is_err());
    /// ```
    pub fn slice(&self, pos: usize, count: usize) -> Result<Self> {
        self.check_range("slice", pos, count)?;
        let mut out = Self::with_len(count);
        for idx in 0..count {
            out.assign_bit(idx, self.read_bit(pos + idx));
        }
        Ok(out)
    }

    /// Flips the bit at `idx` and returns its previous value.
    ///
    /// # Errors
    /// Returns [`BitArrayError::OutOfRange`] if `idx >= len()`.
    ///
    /// # Examples
    /// ```
    /// use light_bitarray::BitArray;
    ///
    /// let mut bits = BitArray::<u8>::with_len(8);
    /// assert_eq!(bits.toggle(4), Ok(false)); // flipped from false to true
    /// assert_eq!(bits.toggle(4), Ok(true));  // flipped from true to false
    /// ```
    pub fn toggle(&mut self, idx: usize) -> Result<bool> {
        self.check_index("toggle", idx)?;
        let bit = self.read_bit(idx);
        self.flip_bit(idx);
        Ok(bit)
    }

    /// Flips every bit. Does nothing on an empty array.
    ///
    /// # Examples
    /// ```
    /// use light_bitarray::BitArray;
    ///
    /// let mut bits: BitArray = "10101011".parse().unwrap();
    /// bits.toggle_all();
    /// assert_eq!(bits.to_string(), "01010100");
    /// ```
    pub fn toggle_all(&mut self) {
        for idx in 0..self.len {
            self.flip_bit(idx);
        }
    }

    /// Returns a copy with every bit flipped, leaving `self` untouched.
    ///
    /// Same as `!&bits`.
    pub fn complement(&self) -> Self {
        let mut out = self.clone();
        out.toggle_all();
        out
    }

    /// Shifts the bits `n` positions towards index 0, filling the vacated
    /// high positions with unset bits.
    ///
    /// The bit at index `i` moves to `i - n`; the first `n` bits are lost.
    /// If `n >= len()`, every bit ends up unset. The length never changes.
    ///
    /// # Examples
    /// ```
    /// use light_bitarray::BitArray;
    ///
    /// let mut bits: BitArray = "011010110".parse().unwrap();
    /// bits.shift_left(3);
    /// assert_eq!(bits.to_string(), "010110000");
    /// ```
    pub fn shift_left(&mut self, n: usize) {
        if n >= self.len {
            self.blocks.fill(B::ZERO);
            return;
        }
        for idx in 0..self.len - n {
            self.assign_bit(idx, self.read_bit(idx + n));
        }
        for idx in self.len - n..self.len {
            self.assign_bit(idx, false);
        }
    }

    /// Shifts the bits `n` positions towards the end, filling the vacated
    /// low positions with unset bits.
    ///
    /// The bit at index `i` moves to `i + n`; the last `n` bits are lost.
    /// If `n >= len()`, every bit ends up unset. The length never changes.
    ///
    /// # Examples
    /// ```
    /// use light_bitarray::BitArray;
    ///
    /// let mut bits: BitArray = "010110000".parse().unwrap();
    /// bits.shift_right(3);
    /// assert_eq!(bits.to_string(), "000010110");
    /// ```
    pub fn shift_right(&mut self, n: usize) {
        if n >= self.len {
            self.blocks.fill(B::ZERO);
            return;
        }
        for idx in (n..self.len).rev() {
            self.assign_bit(idx, self.read_bit(idx - n));
        }
        for idx in 0..n {
            self.assign_bit(idx, false);
        }
    }

    /// Reads a bit the caller has already bounds-checked.
    #[inline]
    pub(crate) fn read_bit(&self, idx: usize) -> bool {
        debug_assert!(idx < self.len, "Bit index {idx} out of bounds");
        let (block_idx, offset) = locate::<B>(idx);
        self.blocks[block_idx].bit(offset)
    }

    /// Writes a bit the caller has already bounds-checked.
    ///
    /// Unlike every public entry point this accepts `idx == len`, which is
    /// where `push` and `insert` write before bumping the length. Capacity
    /// must already cover `idx`.
    #[inline]
    pub(crate) fn assign_bit(&mut self, idx: usize, value: bool) {
        debug_assert!(idx <= self.len, "Bit index {idx} out of bounds");
        let (block_idx, offset) = locate::<B>(idx);
        let block = &mut self.blocks[block_idx];
        *block = block.with_bit(offset, value);
    }

    #[inline]
    fn flip_bit(&mut self, idx: usize) {
        let (block_idx, offset) = locate::<B>(idx);
        let block = &mut self.blocks[block_idx];
        *block = block.with_flipped(offset);
    }

    fn check_index(&self, operation: &'static str, idx: usize) -> Result<()> {
        if idx >= self.len {
            return Err(BitArrayError::out_of_range(operation, idx, self.len));
        }
        Ok(())
    }

    /// Validates `pos..pos + count` and returns its end.
    fn check_range(&self, operation: &'static str, pos: usize, count: usize) -> Result<usize> {
        match pos.checked_add(count) {
            Some(end) if end <= self.len => Ok(end),
            _ => Err(BitArrayError::out_of_range(
                operation,
                pos.saturating_add(count),
                self.len,
            )),
        }
    }
}
