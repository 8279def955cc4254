use std::fmt;

use crate::encoding::{to_hex, Encodable};

/// Largest digest produced by any supported algorithm (GOST)
pub const MAX_DIGEST_SIZE: usize = 32;

/// A finished digest, holding exactly as many bytes as its algorithm produces.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct Digest {
    bytes: [u8; MAX_DIGEST_SIZE],
    len: usize,
}

impl Digest {
    /// Panics if `bytes` is longer than [`MAX_DIGEST_SIZE`]
    pub(crate) fn new(bytes: &[u8]) -> Self {
        assert!(
            bytes.len() <= MAX_DIGEST_SIZE,
            "Digest of {} bytes exceeds the maximum of {MAX_DIGEST_SIZE}.",
            bytes.len()
        );
        let mut out = [0; MAX_DIGEST_SIZE];
        out[..bytes.len()].copy_from_slice(bytes);
        Self {
            bytes: out,
            len: bytes.len(),
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len]
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl Encodable for Digest {
    fn encode_hex(&self) -> String {
        to_hex(self)
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode_hex())
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest({self})")
    }
}
