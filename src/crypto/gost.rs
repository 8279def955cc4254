//! GOST R 34.11-94 built on the GOST 28147-89 block cipher.
//!
//! All 256 bit quantities (chain value, message blocks, checksum, length) are
//! held as little-endian byte arrays: byte 0 is the least significant.
use crate::crypto::digest::Digest;
use crate::crypto::pad::zero_fill;
use crate::crypto::BlockHash;
use crate::util::{as_chunks, cast_as_arrays, xor_in_place};

pub mod constants {
    pub const BLOCK_SIZE: usize = 32;
    pub const DIGEST_SIZE: usize = 32;

    /// Eight 4 bit substitution boxes, `SBox[0]` is applied to the lowest nibble.
    pub type SBox = [[u8; 16]; 8];

    /// id-GostR3411-94-TestParamSet, the parameters used by the standard's own examples.
    #[rustfmt::skip]
    pub static TEST_SBOX: SBox = [
        [ 4, 10,  9,  2, 13,  8,  0, 14,  6, 11,  1, 12,  7, 15,  5,  3],
        [14, 11,  4, 12,  6, 13, 15, 10,  2,  3,  8,  1,  0,  7,  5,  9],
        [ 5,  8,  1, 13, 10,  3,  4,  2, 14, 15, 12,  7,  6,  0,  9, 11],
        [ 7, 13, 10,  1,  0,  8,  9, 15, 14,  4,  6, 12, 11,  2,  5,  3],
        [ 6, 12,  7,  1,  5, 15, 13,  8,  4, 10,  9, 14,  0,  3, 11,  2],
        [ 4, 11, 10,  0,  7,  2,  1, 13,  3,  6,  8,  5,  9, 12, 15, 14],
        [13, 11,  4,  1,  3, 15,  5,  9,  0, 10, 14,  7,  6,  8,  2, 12],
        [ 1, 15, 13,  0,  5,  7, 10,  4,  9,  2,  3, 14,  6, 11,  8, 12],
    ];

    /// id-GostR3411-94-CryptoProParamSet from RFC 4357.
    #[rustfmt::skip]
    pub static CRYPTO_PRO_SBOX: SBox = [
        [10,  4,  5,  6,  8,  1,  3,  7, 13, 12, 14,  0,  9,  2, 11, 15],
        [ 5, 15,  4,  0,  2, 13, 11,  9,  1,  7,  6,  3, 12, 14, 10,  8],
        [ 7, 15, 12, 14,  9,  4,  1,  0,  3, 11,  5,  2,  6, 10,  8, 13],
        [ 4, 10,  7, 12,  0, 15,  2,  8, 14,  1,  6,  5, 13, 11,  9,  3],
        [ 7,  6,  4, 11,  9, 12,  2, 10,  1,  8,  0, 14, 15, 13,  3,  5],
        [ 7,  6,  2,  4, 13,  9, 15,  0, 10,  1,  5, 11,  8, 14, 12,  3],
        [13, 14,  4,  1,  7,  0,  5, 10,  3, 12,  8, 15,  6,  2,  9, 11],
        [ 1,  3, 10,  9,  5, 11,  4, 15,  8,  6,  7, 14, 13,  0,  2, 12],
    ];

    /// The key generation constant C3
    #[rustfmt::skip]
    pub const C3: [u8; BLOCK_SIZE] = [
        0x00, 0xff, 0x00, 0xff, 0x00, 0xff, 0x00, 0xff,
        0xff, 0x00, 0xff, 0x00, 0xff, 0x00, 0xff, 0x00,
        0x00, 0xff, 0xff, 0x00, 0xff, 0x00, 0x00, 0xff,
        0xff, 0x00, 0x00, 0x00, 0xff, 0xff, 0x00, 0xff,
    ];
}
use constants::*;

type Block = [u8; BLOCK_SIZE];

/// Substitution box parameter set for GOST R 34.11-94.
///
/// Different sets produce different digests for the same input.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum GostParams {
    #[default]
    Test,
    CryptoPro,
}

impl GostParams {
    pub fn sbox(self) -> &'static SBox {
        match self {
            GostParams::Test => &TEST_SBOX,
            GostParams::CryptoPro => &CRYPTO_PRO_SBOX,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Gost {
    /// chain value
    h: Block,
    /// sum of all message blocks mod 2^256
    sigma: Block,
    params: GostParams,
}

impl Gost {
    pub const fn new(params: GostParams) -> Self {
        Self {
            h: [0; BLOCK_SIZE],
            sigma: [0; BLOCK_SIZE],
            params,
        }
    }

    pub fn params(&self) -> GostParams {
        self.params
    }

    fn process_block(&mut self, block: &Block) {
        self.step(block);
        self.add_to_sigma(block);
    }

    /// Σ = Σ + M mod 2^256
    fn add_to_sigma(&mut self, block: &Block) {
        let mut carry = 0u16;
        for (s, &m) in self.sigma.iter_mut().zip(block.iter()) {
            let sum = u16::from(*s) + u16::from(m) + carry;
            *s = sum as u8;
            carry = sum >> 8;
        }
    }

    /// The step hash function H = χ(M, H)
    fn step(&mut self, m: &Block) {
        let sbox = self.params.sbox();

        // Generate the four keys and encrypt each 64 bit quarter of H
        let mut s = [0u8; BLOCK_SIZE];
        let mut u = self.h;
        let mut v = *m;
        let quarters = cast_as_arrays::<u8, 8>(&self.h[..]);
        for (i, (out, h_i)) in s.chunks_exact_mut(8).zip(quarters).enumerate() {
            if i > 0 {
                u = a(&u);
                if i == 2 {
                    xor_in_place(&mut u, &C3);
                }
                v = a(&a(&v));
            }
            let mut w = u;
            xor_in_place(&mut w, &v);
            let key = p(&w);
            out.copy_from_slice(&encrypt(sbox, &key, h_i));
        }

        // Mixing transformation: ψ^61(H ⊕ ψ(M ⊕ ψ^12(S)))
        for _ in 0..12 {
            psi(&mut s);
        }
        xor_in_place(&mut s, m);
        psi(&mut s);
        xor_in_place(&mut self.h, &s);
        for _ in 0..61 {
            psi(&mut self.h);
        }
    }
}

impl Default for Gost {
    fn default() -> Self {
        Self::new(GostParams::default())
    }
}

impl BlockHash for Gost {
    const BLOCK_SIZE: usize = BLOCK_SIZE;
    const DIGEST_SIZE: usize = DIGEST_SIZE;

    fn process_blocks(&mut self, data: &[u8]) {
        let (blocks, remaining) = as_chunks(data);
        debug_assert!(remaining.is_empty(), "partial block passed to GOST");
        for block in blocks {
            self.process_block(block);
        }
    }

    fn finalize(&mut self, tail: &[u8], bit_length: u128) -> Digest {
        // a partial final block is zero filled and counted in Σ like any other
        if !tail.is_empty() {
            let block: Block = zero_fill(tail);
            self.process_block(&block);
        }

        let mut length = [0u8; BLOCK_SIZE];
        length[..16].copy_from_slice(&bit_length.to_le_bytes());
        self.step(&length);

        let sigma = self.sigma;
        self.step(&sigma);

        Digest::new(&self.h)
    }

    fn reset(&mut self) {
        self.h = [0; BLOCK_SIZE];
        self.sigma = [0; BLOCK_SIZE];
    }
}

/// A(Y) = (y1 ⊕ y2) || y4 || y3 || y2 over 64 bit words, y1 being the lowest
fn a(y: &Block) -> Block {
    let mut out = [0u8; BLOCK_SIZE];
    out[..24].copy_from_slice(&y[8..]);
    for i in 0..8 {
        out[24 + i] = y[i] ^ y[i + 8];
    }
    out
}

/// Byte permutation φ(i + 1 + 4(k - 1)) = 8i + k
fn p(y: &Block) -> Block {
    let mut out = [0u8; BLOCK_SIZE];
    for i in 0..4 {
        for k in 0..8 {
            out[i + 4 * k] = y[8 * i + k];
        }
    }
    out
}

/// ψ(Y) = (y1 ⊕ y2 ⊕ y3 ⊕ y4 ⊕ y13 ⊕ y16) || y16 || ... || y2 over 16 bit words
fn psi(y: &mut Block) {
    let mut top = [y[0], y[1]];
    for idx in [2, 4, 6, 24, 30] {
        top[0] ^= y[idx];
        top[1] ^= y[idx + 1];
    }
    y.copy_within(2.., 0);
    y[30..].copy_from_slice(&top);
}

/// The GOST 28147-89 round function: substitute, then rotate left by 11
fn round(sbox: &SBox, n: u32, k: u32) -> u32 {
    let x = n.wrapping_add(k);
    let mut out = 0;
    for (i, row) in sbox.iter().enumerate() {
        let shift = 4 * i;
        let nibble = (x >> shift) & 0xf;
        out |= u32::from(row[nibble as usize]) << shift;
    }
    out.rotate_left(11)
}

/// Encrypt one 64 bit block with GOST 28147-89 in simple substitution mode
fn encrypt(sbox: &SBox, key: &Block, block: &[u8; 8]) -> [u8; 8] {
    let mut k = [0u32; 8];
    for (word, chunk) in k.iter_mut().zip(cast_as_arrays::<u8, 4>(&key[..])) {
        *word = u32::from_le_bytes(*chunk);
    }

    let mut n1 = u32::from_le_bytes([block[0], block[1], block[2], block[3]]);
    let mut n2 = u32::from_le_bytes([block[4], block[5], block[6], block[7]]);

    // K1..K8 three times, then K8..K1
    let schedule = (0..24).map(|r| r % 8).chain((0..8).rev());
    for i in schedule {
        let t = n2 ^ round(sbox, n1, k[i]);
        n2 = n1;
        n1 = t;
    }

    let mut out = [0u8; 8];
    out[..4].copy_from_slice(&n2.to_le_bytes());
    out[4..].copy_from_slice(&n1.to_le_bytes());
    out
}
