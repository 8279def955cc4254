//! Streaming MD5, SHA-1 and GOST R 34.11-94 hashing behind one context type.
//!
//! ```
//! use cryptohash::{HashContext, HashType};
//!
//! let mut ctx = HashContext::new(HashType::Sha1);
//! ctx.update("ab");
//! ctx.update("c");
//! assert_eq!(
//!     ctx.get_string().unwrap(),
//!     "a9993e364706816aba3e25717850c26c9cd0d89d"
//! );
//! // the context is now closed, updates are ignored until it's reset
//! assert!(ctx.is_closed());
//! ```

pub mod context;
pub mod crypto;
pub mod encoding;
pub mod error;
pub mod handle;
mod util;

pub use context::HashContext;
pub use crypto::{Digest, GostParams, HashType};
pub use error::{HashError, Result};
pub use handle::Handle;

/// Hash `data` in one go
/// ```
/// use cryptohash::{hash, HashType};
/// assert_eq!(hash(HashType::Md5, b"").len(), 16);
/// ```
pub fn hash(hash_type: HashType, data: impl AsRef<[u8]>) -> Digest {
    let mut ctx = HashContext::new(hash_type);
    ctx.update(data);
    ctx.digest()
}

/// Hash `data` in one go, returning lowercase hex
/// ```
/// use cryptohash::{hash_hex, HashType};
/// assert_eq!(hash_hex(HashType::Md5, "abc"), "900150983cd24fb0d6963f7d28e17f72");
/// ```
pub fn hash_hex(hash_type: HashType, data: impl AsRef<[u8]>) -> String {
    encoding::to_hex(hash(hash_type, data))
}
