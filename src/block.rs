use core::fmt::Debug;
use core::hash::Hash;

/// An unsigned integer used as the backing storage unit of a
/// [`BitArray`](crate::BitArray).
///
/// Bit `offset` of a block is the bit selected by `1 << offset`, so the lowest
/// logical index of a block lives in its least significant bit.
///
/// Implemented for `u8`, `u16`, `u32`, `u64`, `u128` and `usize`.
pub trait Block: Copy + Eq + Hash + Debug + Default {
    /// Number of bits packed into one block.
    const BITS: usize;

    /// The block with every bit unset.
    const ZERO: Self;

    /// Returns `true` if the bit at `offset` is set.
    fn bit(self, offset: usize) -> bool;

    /// Returns a copy of the block with the bit at `offset` set to `value`.
    fn with_bit(self, offset: usize, value: bool) -> Self;

    /// Returns a copy of the block with the bit at `offset` flipped.
    fn with_flipped(self, offset: usize) -> Self;
}

macro_rules! impl_block {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Block for $ty {
                const BITS: usize = <$ty>::BITS as usize;
                const ZERO: Self = 0;

                #[inline]
                fn bit(self, offset: usize) -> bool {
                    self & (1 << offset) != 0
                }

                #[inline]
                fn with_bit(self, offset: usize, value: bool) -> Self {
                    if value {
                        self | (1 << offset)
                    } else {
                        self & !(1 << offset)
                    }
                }

                #[inline]
                fn with_flipped(self, offset: usize) -> Self {
                    self ^ (1 << offset)
                }
            }
        )+
    };
}

impl_block!(u8, u16, u32, u64, u128, usize);

/// Computes the number of `B` blocks needed to store `bit_count` bits.
///
/// # Examples
/// ```
/// use light_bitarray::block_count;
///
/// assert_eq!(block_count::<u8>(9), 2);
/// assert_eq!(block_count::<u8>(16), 2);
/// assert_eq!(block_count::<u32>(33), 2);
/// ```
pub const fn block_count<B: Block>(bit_count: usize) -> usize {
    bit_count.div_ceil(B::BITS)
}

/// Splits a bit index into its (block, offset) pair.
#[inline]
pub(crate) const fn locate<B: Block>(idx: usize) -> (usize, usize) {
    (idx / B::BITS, idx % B::BITS)
}
