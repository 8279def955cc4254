/// Byte order used to encode the message length in the final block
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum LengthOrder {
    Little,
    Big,
}

/// Size of the Merkle–Damgård length field in bytes
pub const LENGTH_FIELD_SIZE: usize = 8;

/// Merkle–Damgård strengthening as used by MD5 and SHA-1.
///
/// Appends `0x80`, then zeros until the data sits [`LENGTH_FIELD_SIZE`] bytes
/// short of a block boundary, then the 64 bit message length in bits.
/// The returned buffer is always a whole number of blocks (one or two).
pub fn md_strengthen(
    tail: &[u8],
    bit_length: u64,
    block_size: usize,
    order: LengthOrder,
) -> Vec<u8> {
    debug_assert!(tail.len() < block_size, "tail must be shorter than a block");

    let mut out = Vec::with_capacity(2 * block_size);
    out.extend_from_slice(tail);
    out.push(0x80);

    let zeros = (2 * block_size - LENGTH_FIELD_SIZE - out.len()) % block_size;
    out.resize(out.len() + zeros, 0);

    match order {
        LengthOrder::Little => out.extend_from_slice(&bit_length.to_le_bytes()),
        LengthOrder::Big => out.extend_from_slice(&bit_length.to_be_bytes()),
    }

    debug_assert_eq!(out.len() % block_size, 0);
    out
}

/// Copy a partial block into a zero filled block, GOST style.
pub fn zero_fill<const N: usize>(tail: &[u8]) -> [u8; N] {
    let mut block = [0; N];
    block[..tail.len()].copy_from_slice(tail);
    block
}
