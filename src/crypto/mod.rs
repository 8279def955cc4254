use std::fmt;
use std::str::FromStr;

use crate::error::HashError;

pub mod digest;
pub mod gost;
pub mod md5;
pub mod pad;
pub mod sha1;

pub use digest::Digest;
pub use gost::{Gost, GostParams};
pub use md5::Md5;
pub use sha1::Sha1;

/// A block oriented compression engine.
///
/// Engines only ever see whole blocks, buffering of partial input is left
/// to [`HashContext`](crate::HashContext).
pub trait BlockHash {
    const BLOCK_SIZE: usize;

    const DIGEST_SIZE: usize;

    /// Compress `data`, whose length must be a multiple of `BLOCK_SIZE`
    fn process_blocks(&mut self, data: &[u8]);

    /// Pad and compress the final partial block, then extract the digest.
    ///
    /// `bit_length` is the length of the whole message in bits.
    fn finalize(&mut self, tail: &[u8], bit_length: u128) -> Digest;

    /// Return to the initial state
    fn reset(&mut self);
}

/// The supported hash functions, the discriminants are stable numeric codes.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[repr(u32)]
pub enum HashType {
    Md5 = 0,
    Sha1 = 1,
    Gost = 2,
}

impl HashType {
    pub const ALL: [HashType; 3] = [HashType::Md5, HashType::Sha1, HashType::Gost];

    pub const fn block_size(self) -> usize {
        match self {
            HashType::Md5 => Md5::BLOCK_SIZE,
            HashType::Sha1 => Sha1::BLOCK_SIZE,
            HashType::Gost => Gost::BLOCK_SIZE,
        }
    }

    pub const fn digest_size(self) -> usize {
        match self {
            HashType::Md5 => Md5::DIGEST_SIZE,
            HashType::Sha1 => Sha1::DIGEST_SIZE,
            HashType::Gost => Gost::DIGEST_SIZE,
        }
    }

    pub const fn code(self) -> u32 {
        self as u32
    }
}

impl TryFrom<u32> for HashType {
    type Error = HashError;

    fn try_from(code: u32) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(HashType::Md5),
            1 => Ok(HashType::Sha1),
            2 => Ok(HashType::Gost),
            other => Err(HashError::UnsupportedType(other)),
        }
    }
}

impl FromStr for HashType {
    type Err = HashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "md5" => Ok(HashType::Md5),
            "sha1" | "sha-1" => Ok(HashType::Sha1),
            "gost" | "gost94" => Ok(HashType::Gost),
            _ => Err(HashError::UnknownName(s.to_owned())),
        }
    }
}

impl fmt::Display for HashType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            HashType::Md5 => "MD5",
            HashType::Sha1 => "SHA-1",
            HashType::Gost => "GOST R 34.11-94",
        })
    }
}

/// Running state of one of the fixed set of engines
#[derive(Debug, Clone)]
pub(crate) enum Engine {
    Md5(Md5),
    Sha1(Sha1),
    Gost(Gost),
}

impl Engine {
    pub fn new(hash_type: HashType, params: GostParams) -> Self {
        match hash_type {
            HashType::Md5 => Engine::Md5(Md5::new()),
            HashType::Sha1 => Engine::Sha1(Sha1::new()),
            HashType::Gost => Engine::Gost(Gost::new(params)),
        }
    }

    pub fn hash_type(&self) -> HashType {
        match self {
            Engine::Md5(_) => HashType::Md5,
            Engine::Sha1(_) => HashType::Sha1,
            Engine::Gost(_) => HashType::Gost,
        }
    }

    pub fn process_blocks(&mut self, data: &[u8]) {
        match self {
            Engine::Md5(e) => e.process_blocks(data),
            Engine::Sha1(e) => e.process_blocks(data),
            Engine::Gost(e) => e.process_blocks(data),
        }
    }

    pub fn finalize(&mut self, tail: &[u8], bit_length: u128) -> Digest {
        match self {
            Engine::Md5(e) => e.finalize(tail, bit_length),
            Engine::Sha1(e) => e.finalize(tail, bit_length),
            Engine::Gost(e) => e.finalize(tail, bit_length),
        }
    }

    pub fn reset(&mut self) {
        match self {
            Engine::Md5(e) => e.reset(),
            Engine::Sha1(e) => e.reset(),
            Engine::Gost(e) => e.reset(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor_sizes() {
        assert_eq!(HashType::Md5.block_size(), 64);
        assert_eq!(HashType::Sha1.block_size(), 64);
        assert_eq!(HashType::Gost.block_size(), 32);
        assert_eq!(HashType::Md5.digest_size(), 16);
        assert_eq!(HashType::Sha1.digest_size(), 20);
        assert_eq!(HashType::Gost.digest_size(), 32);
    }

    #[test]
    fn test_codes_round_trip() {
        for hash_type in HashType::ALL {
            assert_eq!(HashType::try_from(hash_type.code()).unwrap(), hash_type);
        }
    }

    #[test]
    fn test_unknown_code_fails() {
        assert!(matches!(
            HashType::try_from(3),
            Err(HashError::UnsupportedType(3))
        ));
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("MD5".parse::<HashType>().unwrap(), HashType::Md5);
        assert_eq!("sha-1".parse::<HashType>().unwrap(), HashType::Sha1);
        assert_eq!("Gost94".parse::<HashType>().unwrap(), HashType::Gost);
        assert!("sha256".parse::<HashType>().is_err());
    }

    #[test]
    fn test_engine_reports_its_type() {
        for hash_type in HashType::ALL {
            assert_eq!(
                Engine::new(hash_type, GostParams::Test).hash_type(),
                hash_type
            );
        }
    }
}
