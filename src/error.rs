//! Errors surfaced by hash contexts and handles

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HashError {
    #[error("Operation on a destroyed or invalid hash handle")]
    InvalidHandle,

    #[error("Unsupported hash type code: {0}")]
    UnsupportedType(u32),

    #[error("Unknown hash function name: {0:?}")]
    UnknownName(String),

    #[error("Failed to allocate memory for the result")]
    AllocationFailure,

    #[error("Digest buffer too small: {required} bytes required, {provided} provided")]
    BufferTooSmall { required: usize, provided: usize },
}

impl HashError {
    /// The integer failure value used by callers that follow the `-1` convention
    pub const fn sentinel(&self) -> isize {
        -1
    }
}

/// Result type for hashing operations
pub type Result<T> = std::result::Result<T, HashError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_too_small_message() {
        let err = HashError::BufferTooSmall {
            required: 20,
            provided: 16,
        };
        assert_eq!(
            err.to_string(),
            "Digest buffer too small: 20 bytes required, 16 provided"
        );
    }

    #[test]
    fn test_sentinel() {
        assert_eq!(HashError::InvalidHandle.sentinel(), -1);
    }
}
