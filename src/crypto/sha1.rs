//! SHA-1 implemented as per FIPS 180-4: https://nvlpubs.nist.gov/nistpubs/FIPS/NIST.FIPS.180-4.pdf
use crate::crypto::digest::Digest;
use crate::crypto::pad::{md_strengthen, LengthOrder};
use crate::crypto::BlockHash;
use crate::util::{as_chunks, cast_as_arrays};

macro_rules! Ch {
    ($x:expr, $y:expr, $z:expr) => {
        ($x & $y) ^ (!$x & $z)
    };
}

macro_rules! Maj {
    ($x:expr, $y:expr, $z:expr) => {
        ($x & $y) ^ ($x & $z) ^ ($y & $z)
    };
}

macro_rules! Parity {
    ($x:expr, $y:expr, $z:expr) => {
        $x ^ $y ^ $z
    };
}

pub mod constants {
    pub const H0: u32 = 0x67452301;
    pub const H1: u32 = 0xEFCDAB89;
    pub const H2: u32 = 0x98BADCFE;
    pub const H3: u32 = 0x10325476;
    pub const H4: u32 = 0xC3D2E1F0;

    pub const INIT_STATE: [u32; 5] = [H0, H1, H2, H3, H4];

    pub const K: [u32; 4] = [0x5A827999, 0x6ED9EBA1, 0x8F1BBCDC, 0xCA62C1D6];

    pub const ROUNDS: usize = 80;
    pub const BLOCK_SIZE: usize = 64;
    pub const DIGEST_SIZE: usize = 20;
}
use constants::*;

#[derive(Debug, Clone)]
pub struct Sha1 {
    state: [u32; 5],
}

impl Sha1 {
    pub const fn new() -> Self {
        Self { state: INIT_STATE }
    }

    #[allow(non_snake_case)]
    fn process_block(&mut self, block: &[u8; BLOCK_SIZE]) {
        // The message schedule
        let mut W = [0u32; ROUNDS];

        // Split the block into word sized chunks
        for (schedule_word, chunk) in W.iter_mut().zip(cast_as_arrays(&block[..])) {
            *schedule_word = u32::from_be_bytes(*chunk);
        }

        // Expand the message into the rest of the schedule
        for t in 16..ROUNDS {
            W[t] = (W[t - 3] ^ W[t - 8] ^ W[t - 14] ^ W[t - 16]).rotate_left(1);
        }

        // Working variables
        let [mut a, mut b, mut c, mut d, mut e] = self.state;

        for (t, w) in W.iter().enumerate() {
            let (f, k) = match t {
                0..=19 => (Ch!(b, c, d), K[0]),
                20..=39 => (Parity!(b, c, d), K[1]),
                40..=59 => (Maj!(b, c, d), K[2]),
                _ => (Parity!(b, c, d), K[3]),
            };

            let temp = a
                .rotate_left(5)
                .wrapping_add(f)
                .wrapping_add(e)
                .wrapping_add(k)
                .wrapping_add(*w);
            e = d;
            d = c;
            c = b.rotate_left(30);
            b = a;
            a = temp;
        }

        // Compute the intermediate hash value
        self.state[0] = self.state[0].wrapping_add(a);
        self.state[1] = self.state[1].wrapping_add(b);
        self.state[2] = self.state[2].wrapping_add(c);
        self.state[3] = self.state[3].wrapping_add(d);
        self.state[4] = self.state[4].wrapping_add(e);
    }
}

impl Default for Sha1 {
    fn default() -> Self {
        Self::new()
    }
}

impl BlockHash for Sha1 {
    const BLOCK_SIZE: usize = BLOCK_SIZE;
    const DIGEST_SIZE: usize = DIGEST_SIZE;

    fn process_blocks(&mut self, data: &[u8]) {
        let (blocks, remaining) = as_chunks(data);
        debug_assert!(remaining.is_empty(), "partial block passed to SHA-1");
        for block in blocks {
            self.process_block(block);
        }
    }

    fn finalize(&mut self, tail: &[u8], bit_length: u128) -> Digest {
        let padded = md_strengthen(tail, bit_length as u64, BLOCK_SIZE, LengthOrder::Big);
        self.process_blocks(&padded);

        let mut digest = [0; DIGEST_SIZE];
        for (out, word) in digest.chunks_exact_mut(4).zip(self.state) {
            out.copy_from_slice(&word.to_be_bytes());
        }
        Digest::new(&digest)
    }

    fn reset(&mut self) {
        self.state = INIT_STATE;
    }
}
