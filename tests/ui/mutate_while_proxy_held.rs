use light_bitarray::BitArray;

fn main() {
    let mut bits = BitArray::<u8>::with_len(4);
    let mut bit = bits.bit_mut(0).unwrap();
    bits.push(true);
    bit.set(true);
}
