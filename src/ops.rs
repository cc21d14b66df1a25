use core::cmp::Ordering;
use core::fmt::{Debug, Formatter};
use core::hash::{Hash, Hasher};
use core::ops::{AddAssign, Index, Not, Shl, ShlAssign, Shr, ShrAssign};

use crate::bitarray::BitArray;
use crate::block::Block;

impl<B: Block> Default for BitArray<B> {
    fn default() -> Self {
        Self::new()
    }
}

/// Two arrays are equal if they have the same length and the same bit at
/// every index. Spare capacity is ignored.
impl<B: Block> PartialEq for BitArray<B> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && (0..self.len).all(|idx| self.read_bit(idx) == other.read_bit(idx))
    }
}

impl<B: Block> Eq for BitArray<B> {}

impl<B: Block> PartialOrd for BitArray<B> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Lexicographic order: the first differing bit decides, an unset bit being
/// the smaller one. If one array is a prefix of the other, the shorter one is
/// smaller.
///
/// # Examples
/// ```
/// use light_bitarray::BitArray;
///
/// let short: BitArray = "111".parse().unwrap();
/// let long: BitArray = "10111".parse().unwrap();
/// assert!(short > long);
///
/// let prefix: BitArray = "10101".parse().unwrap();
/// let extended: BitArray = "101010".parse().unwrap();
/// assert!(prefix < extended);
/// ```
impl<B: Block> Ord for BitArray<B> {
    fn cmp(&self, other: &Self) -> Ordering {
        (0..self.len.min(other.len))
            .map(|idx| self.read_bit(idx).cmp(&other.read_bit(idx)))
            .find(|ordering| ordering.is_ne())
            .unwrap_or_else(|| self.len.cmp(&other.len))
    }
}

impl<B: Block> Hash for BitArray<B> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len.hash(state);
        for idx in 0..self.len {
            self.read_bit(idx).hash(state);
        }
    }
}

impl<B: Block> Debug for BitArray<B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "BitArray[{}/{}]", self.len, self.capacity())?;
        for idx in 0..self.len {
            if idx % B::BITS == 0 {
                write!(f, " {idx}: ")?;
            }
            write!(f, "{}", if self.read_bit(idx) { '1' } else { '0' })?;
        }
        Ok(())
    }
}

/// Constructs an array by pushing every yielded bit.
impl<B: Block> FromIterator<bool> for BitArray<B> {
    fn from_iter<T: IntoIterator<Item = bool>>(iter: T) -> Self {
        let mut array = Self::new();
        array.extend(iter);
        array
    }
}

impl<B: Block> Extend<bool> for BitArray<B> {
    fn extend<T: IntoIterator<Item = bool>>(&mut self, iter: T) {
        for bit in iter {
            self.push(bit);
        }
    }
}

/// # Panics
/// Panics if the index is out of bounds (i.e., `>= len()`). Use
/// [`BitArray::get`] for a checked read.
impl<B: Block> Index<usize> for BitArray<B> {
    type Output = bool;

    fn index(&self, idx: usize) -> &bool {
        assert!(idx < self.len, "Bit index {idx} out of bounds");
        if self.read_bit(idx) { &true } else { &false }
    }
}

impl<B: Block> AddAssign<bool> for BitArray<B> {
    fn add_assign(&mut self, bit: bool) {
        self.push(bit);
    }
}

impl<B: Block> AddAssign<&BitArray<B>> for BitArray<B> {
    fn add_assign(&mut self, rhs: &BitArray<B>) {
        self.append(rhs);
    }
}

impl<B: Block> Not for BitArray<B> {
    type Output = Self;

    fn not(mut self) -> Self::Output {
        self.toggle_all();
        self
    }
}

impl<B: Block> Not for &BitArray<B> {
    type Output = BitArray<B>;

    fn not(self) -> Self::Output {
        self.complement()
    }
}

impl<B: Block> Shl<usize> for BitArray<B> {
    type Output = Self;

    fn shl(mut self, rhs: usize) -> Self::Output {
        self.shift_left(rhs);
        self
    }
}

impl<B: Block> Shl<usize> for &BitArray<B> {
    type Output = BitArray<B>;

    fn shl(self, rhs: usize) -> Self::Output {
        self.clone() << rhs
    }
}

impl<B: Block> ShlAssign<usize> for BitArray<B> {
    fn shl_assign(&mut self, rhs: usize) {
        self.shift_left(rhs);
    }
}

impl<B: Block> Shr<usize> for BitArray<B> {
    type Output = Self;

    fn shr(mut self, rhs: usize) -> Self::Output {
        self.shift_right(rhs);
        self
    }
}

impl<B: Block> Shr<usize> for &BitArray<B> {
    type Output = BitArray<B>;

    fn shr(self, rhs: usize) -> Self::Output {
        self.clone() >> rhs
    }
}

impl<B: Block> ShrAssign<usize> for BitArray<B> {
    fn shr_assign(&mut self, rhs: usize) {
        self.shift_right(rhs);
    }
}
