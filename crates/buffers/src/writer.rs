//! Auto-growing binary buffer writer.

const DEFAULT_ALLOC_SIZE: usize = 64;

/// A binary buffer writer.
///
/// `uint8` is the backing storage and `x` the write cursor; bytes past `x`
/// are scratch space. Growth doubles the backing storage, so appending `n`
/// bytes costs amortized `O(n)`.
///
/// # Example
///
/// ```
/// use cborlite_buffers::Writer;
///
/// let mut writer = Writer::new();
/// writer.u8u16(0x19, 0x0100);
/// assert_eq!(writer.flush(), vec![0x19, 0x01, 0x00]);
/// ```
#[derive(Debug, Clone)]
pub struct Writer {
    /// Backing storage.
    pub uint8: Vec<u8>,
    /// Current write position.
    pub x: usize,
}

impl Default for Writer {
    fn default() -> Self {
        Self::new()
    }
}

impl Writer {
    /// Creates a writer with the default initial allocation.
    pub fn new() -> Self {
        Self::with_alloc_size(DEFAULT_ALLOC_SIZE)
    }

    /// Creates a writer with `alloc_size` bytes pre-allocated.
    pub fn with_alloc_size(alloc_size: usize) -> Self {
        Self {
            uint8: vec![0; alloc_size],
            x: 0,
        }
    }

    /// Makes sure at least `capacity` bytes are writable past the cursor.
    #[inline]
    pub fn ensure_capacity(&mut self, capacity: usize) {
        let required = self.x + capacity;
        if required > self.uint8.len() {
            let grown = (self.uint8.len() * 2).max(required);
            self.uint8.resize(grown, 0);
        }
    }

    /// Rewinds the cursor, keeping the allocation for reuse.
    pub fn reset(&mut self) {
        self.x = 0;
    }

    /// Returns a copy of everything written since the last reset and rewinds.
    pub fn flush(&mut self) -> Vec<u8> {
        let out = self.uint8[..self.x].to_vec();
        self.x = 0;
        out
    }

    /// Number of bytes written since the last reset.
    pub fn len(&self) -> usize {
        self.x
    }

    pub fn is_empty(&self) -> bool {
        self.x == 0
    }

    #[inline]
    pub fn u8(&mut self, byte: u8) {
        self.ensure_capacity(1);
        self.uint8[self.x] = byte;
        self.x += 1;
    }

    /// Writes a big-endian `u16`.
    #[inline]
    pub fn u16(&mut self, word: u16) {
        self.ensure_capacity(2);
        let x = self.x;
        self.uint8[x..x + 2].copy_from_slice(&word.to_be_bytes());
        self.x = x + 2;
    }

    /// Writes a marker byte followed by one payload byte.
    #[inline]
    pub fn u8u8(&mut self, marker: u8, byte: u8) {
        self.ensure_capacity(2);
        let x = self.x;
        self.uint8[x] = marker;
        self.uint8[x + 1] = byte;
        self.x = x + 2;
    }

    /// Writes a marker byte followed by a big-endian `u16`.
    #[inline]
    pub fn u8u16(&mut self, marker: u8, word: u16) {
        self.ensure_capacity(3);
        let x = self.x;
        self.uint8[x] = marker;
        self.uint8[x + 1..x + 3].copy_from_slice(&word.to_be_bytes());
        self.x = x + 3;
    }

    pub fn buf(&mut self, buf: &[u8]) {
        let length = buf.len();
        self.ensure_capacity(length);
        let x = self.x;
        self.uint8[x..x + length].copy_from_slice(buf);
        self.x = x + length;
    }
}
