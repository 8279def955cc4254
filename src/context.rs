//! Streaming hash context with open/closed semantics.
//!
//! A context accepts data while open. Asking for the digest (raw or hex)
//! finalizes it once and closes it, after which further updates are ignored
//! and the cached digest is handed back. [`HashContext::reset`] reopens it.
use std::io;

use log::{trace, warn};
use zeroize::Zeroize;

use crate::crypto::digest::Digest;
use crate::crypto::{Engine, GostParams, HashType};
use crate::encoding::try_to_hex;
use crate::error::{HashError, Result};

/// Largest block size of any supported algorithm
const MAX_BLOCK_SIZE: usize = 64;

#[derive(Clone)]
pub struct HashContext {
    engine: Engine,
    /// bytes waiting for a full block, only `buffer[..buffered]` is live
    buffer: [u8; MAX_BLOCK_SIZE],
    buffered: usize,
    /// total message length in bits
    bit_length: u128,
    /// set once finalized, the context is closed while this is `Some`
    digest: Option<Digest>,
}

impl HashContext {
    pub fn new(hash_type: HashType) -> Self {
        Self::with_engine(Engine::new(hash_type, GostParams::default()))
    }

    /// Create a context from a numeric type code (0 = MD5, 1 = SHA-1, 2 = GOST)
    pub fn try_from_code(code: u32) -> Result<Self> {
        HashType::try_from(code).map(Self::new)
    }

    /// Create a GOST R 34.11-94 context using the given S-box parameter set
    pub fn with_gost_params(params: GostParams) -> Self {
        Self::with_engine(Engine::new(HashType::Gost, params))
    }

    fn with_engine(engine: Engine) -> Self {
        trace!("Created {} hash context", engine.hash_type());
        Self {
            engine,
            buffer: [0; MAX_BLOCK_SIZE],
            buffered: 0,
            bit_length: 0,
            digest: None,
        }
    }

    /// Feed more data into the hash, ignored once the context is closed
    pub fn update(&mut self, data: impl AsRef<[u8]>) {
        let mut data = data.as_ref();

        if self.is_closed() {
            warn!(
                "Ignoring {} bytes passed to a closed {} context",
                data.len(),
                self.get_type()
            );
            return;
        }
        if data.is_empty() {
            return;
        }

        let block_size = self.get_type().block_size();
        self.bit_length += data.len() as u128 * u128::from(u8::BITS);

        // top up a partially filled buffer first
        if self.buffered > 0 {
            let take = (block_size - self.buffered).min(data.len());
            self.buffer[self.buffered..self.buffered + take].copy_from_slice(&data[..take]);
            self.buffered += take;
            data = &data[take..];

            if self.buffered < block_size {
                return;
            }
            self.engine.process_blocks(&self.buffer[..block_size]);
            self.buffered = 0;
        }

        // whole blocks straight from the input, the remainder gets buffered
        let (blocks, remaining) = data.split_at(data.len() - data.len() % block_size);
        self.engine.process_blocks(blocks);
        self.buffer[..remaining.len()].copy_from_slice(remaining);
        self.buffered = remaining.len();
    }

    /// Reopen the context, dropping all data and any cached digest
    pub fn reset(&mut self) {
        trace!("Resetting {} hash context", self.get_type());
        self.engine.reset();
        self.buffer.zeroize();
        self.buffered = 0;
        self.bit_length = 0;
        self.digest = None;
    }

    /// Finalize if still open and return the digest
    pub fn digest(&mut self) -> Digest {
        match self.digest {
            Some(digest) => digest,
            None => self.finalize(),
        }
    }

    /// Write the raw digest into `out`, closing the context.
    ///
    /// Returns the number of bytes written, which is always the digest size.
    /// Nothing is written if `out` can't hold the entire digest.
    pub fn get_digest(&mut self, out: &mut [u8]) -> Result<usize> {
        let required = self.get_length();
        if out.len() < required {
            return Err(HashError::BufferTooSmall {
                required,
                provided: out.len(),
            });
        }

        let digest = self.digest();
        out[..required].copy_from_slice(digest.as_bytes());
        Ok(required)
    }

    /// The digest as a lowercase hex string, closing the context
    pub fn get_string(&mut self) -> Result<String> {
        try_to_hex(self.digest())
    }

    /// Digest size in bytes, fixed by the hash type
    pub fn get_length(&self) -> usize {
        self.get_type().digest_size()
    }

    pub fn get_type(&self) -> HashType {
        self.engine.hash_type()
    }

    pub fn is_closed(&self) -> bool {
        self.digest.is_some()
    }

    fn finalize(&mut self) -> Digest {
        trace!(
            "Finalizing {} hash context after {} bits",
            self.get_type(),
            self.bit_length
        );
        let digest = self
            .engine
            .finalize(&self.buffer[..self.buffered], self.bit_length);
        self.buffer.zeroize();
        self.buffered = 0;
        self.digest = Some(digest);
        digest
    }
}

impl std::fmt::Debug for HashContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // buffered message bytes are never printed
        f.debug_struct("HashContext")
            .field("hash_type", &self.get_type())
            .field("buffered", &self.buffered)
            .field("bit_length", &self.bit_length)
            .field("digest", &self.digest)
            .finish()
    }
}

impl Drop for HashContext {
    fn drop(&mut self) {
        self.buffer.zeroize();
    }
}

/// Stream data in with `io::copy` and friends
impl io::Write for HashContext {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.update(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoding::Encodable;

    #[test]
    fn test_new_context_is_open() {
        for hash_type in HashType::ALL {
            let ctx = HashContext::new(hash_type);
            assert!(!ctx.is_closed());
            assert_eq!(ctx.get_type(), hash_type);
            assert_eq!(ctx.get_length(), hash_type.digest_size());
        }
    }

    #[test]
    fn test_unsupported_code() {
        assert_eq!(
            HashContext::try_from_code(7).unwrap_err(),
            HashError::UnsupportedType(7)
        );
    }

    #[test]
    fn test_buffer_stays_below_block_size() {
        for hash_type in HashType::ALL {
            let mut ctx = HashContext::new(hash_type);
            for len in [1, 31, 32, 33, 63, 64, 65, 200] {
                ctx.update(vec![0x61; len]);
                assert!(ctx.buffered < hash_type.block_size());
            }
        }
    }

    #[test]
    fn test_bit_length_counts_every_byte() {
        let mut ctx = HashContext::new(HashType::Sha1);
        ctx.update(b"abc");
        ctx.update(vec![0; 100]);
        assert_eq!(ctx.bit_length, 103 * 8);
    }

    #[test]
    fn test_digest_closes_context() {
        let mut ctx = HashContext::new(HashType::Md5);
        ctx.update("abc");
        let digest = ctx.digest();
        assert!(ctx.is_closed());
        assert_eq!(digest.encode_hex(), "900150983cd24fb0d6963f7d28e17f72");
    }

    #[test]
    fn test_update_after_close_is_ignored() {
        let mut ctx = HashContext::new(HashType::Sha1);
        ctx.update("abc");
        let first = ctx.digest();
        ctx.update("more data");
        assert_eq!(ctx.bit_length, 24);
        assert_eq!(ctx.digest(), first);
    }

    #[test]
    fn test_reset_reopens() {
        let mut ctx = HashContext::new(HashType::Gost);
        ctx.update("abc");
        ctx.digest();
        ctx.reset();
        assert!(!ctx.is_closed());
        assert_eq!(ctx.buffered, 0);
        assert_eq!(ctx.bit_length, 0);
        assert_eq!(ctx.get_type(), HashType::Gost);
    }

    #[test]
    fn test_reset_keeps_gost_params() {
        let mut ctx = HashContext::with_gost_params(GostParams::CryptoPro);
        ctx.update("abc");
        ctx.reset();
        assert_eq!(
            ctx.get_string().unwrap(),
            "981e5f3ca30c841487830f84fb433e13ac1101569b9c13584ac483234cd656c0"
        );
    }

    #[test]
    fn test_get_digest_too_small_writes_nothing() {
        let mut ctx = HashContext::new(HashType::Sha1);
        let mut out = [0xEE; 19];
        assert_eq!(
            ctx.get_digest(&mut out),
            Err(HashError::BufferTooSmall {
                required: 20,
                provided: 19
            })
        );
        assert_eq!(out, [0xEE; 19]);
        // a failed request doesn't finalize
        assert!(!ctx.is_closed());
    }

    #[test]
    fn test_get_digest_larger_buffer() {
        let mut ctx = HashContext::new(HashType::Md5);
        let mut out = [0xEE; 20];
        assert_eq!(ctx.get_digest(&mut out), Ok(16));
        assert_eq!(&out[..16], ctx.digest().as_bytes());
        assert_eq!(&out[16..], &[0xEE; 4]);
    }

    #[test]
    fn test_write_impl() {
        let mut ctx = HashContext::new(HashType::Md5);
        io::copy(&mut &b"message digest"[..], &mut ctx).unwrap();
        assert_eq!(
            ctx.get_string().unwrap(),
            "f96b697d7cb7938d525a2f31aaf161d0"
        );
    }

    #[test]
    fn test_debug_hides_buffer() {
        let mut ctx = HashContext::new(HashType::Md5);
        ctx.update("secret");
        let debug = format!("{ctx:?}");
        assert!(!debug.contains("buffer:"));
        assert!(debug.contains("Md5"));
    }
}
