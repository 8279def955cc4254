//! Opaque handle over a [`HashContext`].
//!
//! A handle can be destroyed explicitly. Afterwards `update`, `reset` and
//! `destroy` do nothing, and every query fails with
//! [`HashError::InvalidHandle`].
use log::debug;

use crate::context::HashContext;
use crate::crypto::HashType;
use crate::error::{HashError, Result};

#[derive(Debug, Default)]
pub struct Handle {
    context: Option<Box<HashContext>>,
}

impl Handle {
    /// Create a handle from a numeric type code
    pub fn create(code: u32) -> Result<Self> {
        HashContext::try_from_code(code).map(Self::from)
    }

    pub fn new(hash_type: HashType) -> Self {
        HashContext::new(hash_type).into()
    }

    pub fn is_valid(&self) -> bool {
        self.context.is_some()
    }

    pub fn update(&mut self, data: impl AsRef<[u8]>) {
        if let Some(ctx) = self.context.as_deref_mut() {
            ctx.update(data);
        }
    }

    pub fn reset(&mut self) {
        if let Some(ctx) = self.context.as_deref_mut() {
            ctx.reset();
        }
    }

    pub fn get_string(&mut self) -> Result<String> {
        self.context_mut()?.get_string()
    }

    pub fn get_digest(&mut self, out: &mut [u8]) -> Result<usize> {
        self.context_mut()?.get_digest(out)
    }

    pub fn get_length(&self) -> Result<usize> {
        Ok(self.context()?.get_length())
    }

    pub fn get_type(&self) -> Result<HashType> {
        Ok(self.context()?.get_type())
    }

    /// Release the context, the handle is invalid from here on
    pub fn destroy(&mut self) {
        if let Some(ctx) = self.context.take() {
            debug!("Destroyed {} hash handle", ctx.get_type());
        }
    }

    fn context(&self) -> Result<&HashContext> {
        self.context.as_deref().ok_or(HashError::InvalidHandle)
    }

    fn context_mut(&mut self) -> Result<&mut HashContext> {
        self.context.as_deref_mut().ok_or(HashError::InvalidHandle)
    }
}

impl From<HashContext> for Handle {
    fn from(context: HashContext) -> Self {
        Self {
            context: Some(Box::new(context)),
        }
    }
}
