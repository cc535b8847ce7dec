//! Fixed-capacity byte region with position/limit cursor discipline
//!
//! The recorder's storage primitive: a pre-zeroed byte buffer that is never
//! resized, only rewound. `position` is the write/read cursor, `limit` the
//! first inaccessible byte. Scratch regions in the recorder pool and
//! externally attached regions are both `ByteRegion`s.

/// Fixed-capacity byte buffer with a position cursor and a limit
///
/// Invariant: `position <= limit <= capacity`. All multi-byte values are
/// little-endian, per the vertex layout's binary contract. Writing or
/// reading past `limit` is a programmer error and panics.
///
/// # Example
///
/// ```
/// use render_batch::region::ByteRegion;
///
/// let mut region = ByteRegion::with_capacity(64);
/// region.put_f32(1.5);
/// region.put_u8(0xAB);
/// region.flip();
/// assert_eq!(region.read_f32(), 1.5);
/// assert_eq!(region.read_u8(), 0xAB);
/// ```
#[derive(Debug, Clone)]
pub struct ByteRegion {
    data: Box<[u8]>,
    position: usize,
    limit: usize,
}

impl ByteRegion {
    /// Create a pre-zeroed region of the given capacity
    ///
    /// The cursor starts at 0 and the limit at `capacity`.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: vec![0_u8; capacity].into_boxed_slice(),
            position: 0,
            limit: capacity,
        }
    }

    /// Create a region holding the given bytes
    ///
    /// Capacity and limit equal the byte length; the cursor starts at 0.
    pub fn from_vec(bytes: Vec<u8>) -> Self {
        let limit = bytes.len();
        Self {
            data: bytes.into_boxed_slice(),
            position: 0,
            limit,
        }
    }

    /// Total capacity in bytes
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// Current cursor position
    pub fn position(&self) -> usize {
        self.position
    }

    /// Move the cursor to an absolute byte position
    ///
    /// # Panics
    ///
    /// Panics if `position > limit`.
    pub fn set_position(&mut self, position: usize) {
        assert!(
            position <= self.limit,
            "position {} past limit {}",
            position,
            self.limit
        );
        self.position = position;
    }

    /// First inaccessible byte index
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Set the limit, clamping the cursor to it if necessary
    ///
    /// # Panics
    ///
    /// Panics if `limit > capacity`.
    pub fn set_limit(&mut self, limit: usize) {
        assert!(
            limit <= self.capacity(),
            "limit {} past capacity {}",
            limit,
            self.capacity()
        );
        self.limit = limit;
        if self.position > limit {
            self.position = limit;
        }
    }

    /// Bytes remaining between the cursor and the limit
    pub fn remaining(&self) -> usize {
        self.limit - self.position
    }

    /// Rewind the cursor to 0 and reopen the full capacity
    pub fn clear(&mut self) {
        self.position = 0;
        self.limit = self.capacity();
    }

    /// Flip from writing to reading: limit = position, position = 0
    pub fn flip(&mut self) {
        self.limit = self.position;
        self.position = 0;
    }

    /// Advance the cursor without touching the underlying bytes
    ///
    /// # Panics
    ///
    /// Panics if fewer than `count` bytes remain.
    pub fn skip(&mut self, count: usize) {
        assert!(
            count <= self.remaining(),
            "skip of {} bytes with {} remaining",
            count,
            self.remaining()
        );
        self.position += count;
    }

    // ========================================================================
    // Writes (advance the cursor)
    // ========================================================================

    /// Write one byte at the cursor
    ///
    /// # Panics
    ///
    /// Panics if no bytes remain.
    pub fn put_u8(&mut self, value: u8) {
        assert!(self.remaining() >= 1, "put_u8 past limit {}", self.limit);
        self.data[self.position] = value;
        self.position += 1;
    }

    /// Write one little-endian f32 at the cursor
    ///
    /// # Panics
    ///
    /// Panics if fewer than 4 bytes remain.
    pub fn put_f32(&mut self, value: f32) {
        assert!(self.remaining() >= 4, "put_f32 past limit {}", self.limit);
        self.data[self.position..self.position + 4].copy_from_slice(&value.to_le_bytes());
        self.position += 4;
    }

    /// Write a byte slice at the cursor
    ///
    /// # Panics
    ///
    /// Panics if the slice does not fit before the limit.
    pub fn put_bytes(&mut self, bytes: &[u8]) {
        assert!(
            self.remaining() >= bytes.len(),
            "put_bytes of {} bytes with {} remaining",
            bytes.len(),
            self.remaining()
        );
        self.data[self.position..self.position + bytes.len()].copy_from_slice(bytes);
        self.position += bytes.len();
    }

    // ========================================================================
    // Reads (advance the cursor)
    // ========================================================================

    /// Read one byte at the cursor
    ///
    /// # Panics
    ///
    /// Panics if no bytes remain.
    pub fn read_u8(&mut self) -> u8 {
        assert!(self.remaining() >= 1, "read_u8 past limit {}", self.limit);
        let value = self.data[self.position];
        self.position += 1;
        value
    }

    /// Read one little-endian f32 at the cursor
    ///
    /// # Panics
    ///
    /// Panics if fewer than 4 bytes remain.
    pub fn read_f32(&mut self) -> f32 {
        assert!(self.remaining() >= 4, "read_f32 past limit {}", self.limit);
        let mut raw = [0_u8; 4];
        raw.copy_from_slice(&self.data[self.position..self.position + 4]);
        self.position += 4;
        f32::from_le_bytes(raw)
    }

    // ========================================================================
    // Views
    // ========================================================================

    /// The full backing store, independent of cursor and limit
    pub fn bytes(&self) -> &[u8] {
        &self.data
    }

    /// The bytes written so far: `[0, position)`
    pub fn written(&self) -> &[u8] {
        &self.data[..self.position]
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[path = "region_tests.rs"]
mod tests;
