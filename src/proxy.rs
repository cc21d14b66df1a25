use core::fmt::{Debug, Formatter};

use crate::bitarray::BitArray;
use crate::block::Block;

/// A write-through handle to a single bit of a [`BitArray`].
///
/// Returned by [`BitArray::bit_mut`]. Reads and writes go straight to the
/// owning array; nothing is buffered. There is deliberately no implicit
/// conversion to `bool`, use [`get`](BitRef::get) and [`set`](BitRef::set).
///
/// The handle holds the array's mutable borrow for as long as it lives, so
/// the array cannot be resized while the handle exists and the handle can
/// never outlive the array:
///
/// ```compile_fail
/// use light_bitarray::BitArray;
///
/// let bit = {
///     let mut bits = BitArray::<u8>::with_len(4);
///     bits.bit_mut(0).unwrap()
/// };
/// bit.get();
/// ```
///
/// Two handles into the same array cannot be alive at once, so copying one
/// bit over another within an array goes through a `bool`:
/// `let v = bits.bit_mut(1)?.get(); bits.bit_mut(0)?.set(v);` assigns bit 1
/// to bit 0.
///
/// ```
/// use light_bitarray::BitArray;
///
/// let mut bits: BitArray<u8> = "01".parse().unwrap();
/// let v = bits.bit_mut(1).unwrap().get();
/// bits.bit_mut(0).unwrap().set(v);
/// assert_eq!(bits.to_string(), "11");
/// ```
///
/// # Examples
/// ```
/// use light_bitarray::BitArray;
///
/// let mut source: BitArray = "01".parse().unwrap();
/// let mut target: BitArray = "00".parse().unwrap();
///
/// let from = source.bit_mut(1).unwrap();
/// let mut to = target.bit_mut(0).unwrap();
/// to.set_from(&from);
/// assert!(to.get());
/// assert_eq!(target.to_string(), "10");
/// ```
pub struct BitRef<'array, B: Block = usize> {
    array: &'array mut BitArray<B>,
    idx: usize,
}

impl<'array, B: Block> BitRef<'array, B> {
    /// `idx` must already be checked against `array.len()`.
    pub(crate) fn new(array: &'array mut BitArray<B>, idx: usize) -> Self {
        Self { array, idx }
    }

    /// Returns the index of the bit this handle refers to.
    #[inline]
    pub fn position(&self) -> usize {
        self.idx
    }

    /// Reads the current value of the bit.
    #[inline]
    pub fn get(&self) -> bool {
        self.array.read_bit(self.idx)
    }

    /// Writes `value` into the bit.
    #[inline]
    pub fn set(&mut self, value: bool) {
        self.array.assign_bit(self.idx, value);
    }

    /// Writes the current value of `other` into the bit.
    ///
    /// `other` may point into an array with a different block type.
    #[inline]
    pub fn set_from<C: Block>(&mut self, other: &BitRef<'_, C>) {
        self.set(other.get());
    }
}

impl<B: Block> Debug for BitRef<'_, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("BitRef")
            .field("position", &self.idx)
            .field("value", &self.get())
            .finish()
    }
}
