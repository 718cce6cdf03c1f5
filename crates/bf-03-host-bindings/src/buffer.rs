//! Pointer/length pairs from the host.

use std::slice;

use crate::error::HostError;

/// A borrowed byte buffer handed over by the host
#[derive(Clone, Copy, Debug)]
pub struct HostBuffer<'a> {
    bytes: &'a [u8],
}

impl<'a> HostBuffer<'a> {
    /// Wrap a host pointer and signed length.
    ///
    /// A negative length, or a null pointer with a non-zero length, is an
    /// invalid argument. A null pointer with length 0 is the empty buffer.
    ///
    /// # Safety
    ///
    /// If `ptr` is non-null it must be valid for reads of `len` bytes for
    /// `'a`, and the memory must not be mutated during that time.
    pub unsafe fn from_raw(ptr: *const u8, len: i32, what: &str) -> Result<Self, HostError> {
        let len = usize::try_from(len)
            .map_err(|_| HostError::InvalidArgument(format!("negative {} length: {}", what, len)))?;

        if ptr.is_null() {
            if len == 0 {
                return Ok(Self::from_slice(&[]));
            }
            return Err(HostError::InvalidArgument(format!(
                "null {} pointer with length {}",
                what, len
            )));
        }

        Ok(Self::from_slice(slice::from_raw_parts(ptr, len)))
    }

    /// Wrap a Rust slice
    pub fn from_slice(bytes: &'a [u8]) -> Self {
        Self { bytes }
    }

    pub fn as_slice(&self) -> &'a [u8] {
        self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}
