use core::fmt;
use primitives::hex;
use std::vec::Vec;

/// Linear byte memory owned by a single execution frame.
///
/// Backed by a plain `Vec`, grown on demand and zero-filled. No two
/// frames ever alias a region.
#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Memory {
    data: Vec<u8>,
}

impl fmt::Debug for Memory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Memory")
            .field("data", &hex::encode(&self.data))
            .finish()
    }
}

impl Default for Memory {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl Memory {
    /// Creates an empty memory region with a 4 KiB initial capacity.
    #[inline]
    pub fn new() -> Self {
        Self {
            data: Vec::with_capacity(4 * 1024),
        }
    }

    /// Current length in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` when the region has zero length.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the whole region.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Resizes the region to `new_size`, zero-filling any extension.
    #[inline]
    pub fn resize(&mut self, new_size: usize) {
        self.data.resize(new_size, 0);
    }

    /// Returns `size` bytes of the region starting at `offset`.
    ///
    /// # Panics
    ///
    /// Panics on out-of-bounds access.
    #[inline]
    pub fn slice(&self, offset: usize, size: usize) -> &[u8] {
        &self.data[offset..offset + size]
    }

    /// Returns `size` mutable bytes of the region starting at `offset`.
    ///
    /// # Panics
    ///
    /// Panics on out-of-bounds access.
    #[inline]
    pub fn slice_mut(&mut self, offset: usize, size: usize) -> &mut [u8] {
        &mut self.data[offset..offset + size]
    }

    /// Copies `value` into the region at `offset`.
    ///
    /// # Panics
    ///
    /// Panics on out-of-bounds access.
    #[inline]
    pub fn set(&mut self, offset: usize, value: &[u8]) {
        self.data[offset..offset + value.len()].copy_from_slice(value);
    }

    /// Sets the byte at `offset`.
    ///
    /// # Panics
    ///
    /// Panics on out-of-bounds access.
    #[inline]
    pub fn set_byte(&mut self, offset: usize, byte: u8) {
        self.data[offset] = byte;
    }

    /// Truncates the region to zero length, keeping its capacity.
    #[inline]
    pub fn clear(&mut self) {
        self.data.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resize_zero_fills() {
        let mut memory = Memory::new();
        assert!(memory.is_empty());
        memory.resize(64);
        assert_eq!(memory.len(), 64);
        assert!(memory.data().iter().all(|byte| *byte == 0));
    }

    #[test]
    fn set_and_slice() {
        let mut memory = Memory::new();
        memory.resize(32);
        memory.set(4, &[0xaa, 0xbb]);
        memory.set_byte(6, 0xcc);
        assert_eq!(memory.slice(4, 3), &[0xaa, 0xbb, 0xcc]);
        memory.slice_mut(4, 2).fill(0);
        assert_eq!(memory.slice(4, 3), &[0x00, 0x00, 0xcc]);
    }

    #[test]
    fn clear_keeps_capacity() {
        let mut memory = Memory::new();
        memory.resize(128);
        memory.clear();
        assert!(memory.is_empty());
        assert!(memory.data.capacity() >= 128);
    }
}
