//! `serde` support through the `'0'`/`'1'` text form.

use core::fmt::{self, Formatter};
use core::marker::PhantomData;

use serde::de::{self, Deserialize, Deserializer, Visitor};
use serde::ser::{Serialize, Serializer};

use crate::bitarray::BitArray;
use crate::block::Block;

impl<B: Block> Serialize for BitArray<B> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de, B: Block> Deserialize<'de> for BitArray<B> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_str(BitArrayVisitor(PhantomData))
    }
}

struct BitArrayVisitor<B>(PhantomData<B>);

impl<B: Block> Visitor<'_> for BitArrayVisitor<B> {
    type Value = BitArray<B>;

    fn expecting(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("a string of '0' and '1' characters")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        v.parse().map_err(E::custom)
    }
}
