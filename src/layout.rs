//! Interleaved vertex layout: stride arithmetic and attribute coercion
//!
//! Defines the binary contract every recorded vertex obeys, bit-exact and
//! little-endian:
//!
//! ```text
//! offset  0..8   uv        2 x f32 (u, v)
//! offset  8..12  color     4 x u8  (r, g, b, a)
//! offset 12..24  position  3 x f32 (x, y, z)
//! offset 24..36  normal    3 x f32 (reserved, always zero-filled)
//! ```
//!
//! All four segments are always present in the buffer even when a write
//! variant does not supply them; placeholders are skipped over, never
//! omitted, so the 36-byte stride holds for every record.

use bytemuck::{Pod, Zeroable};

/// Byte distance between the start of consecutive vertex records
pub const STRIDE: usize = 36;

/// Byte offset of the UV segment within a record
pub const UV_OFFSET: usize = 0;
/// Byte offset of the color segment within a record
pub const COLOR_OFFSET: usize = 8;
/// Byte offset of the position segment within a record
pub const POSITION_OFFSET: usize = 12;
/// Byte offset of the reserved normal segment within a record
pub const NORMAL_OFFSET: usize = 24;

/// Host-side mirror of one recorded vertex
///
/// `#[repr(C)]` with no padding: the struct's in-memory bytes are exactly
/// the record's buffer bytes on a little-endian host. Used by the decode
/// helper and by tests to read buffers back without manual offset math.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct VertexRecord {
    /// Texture coordinate (u, v)
    pub uv: [f32; 2],
    /// Color channels (r, g, b, a)
    pub color: [u8; 4],
    /// Position after translation was applied
    pub position: [f32; 3],
    /// Reserved normal slot (always zero)
    pub normal: [f32; 3],
}

/// Decode one vertex record from raw buffer bytes
///
/// # Arguments
///
/// * `bytes` - At least [`STRIDE`] bytes starting at a record boundary
///
/// # Panics
///
/// Panics if fewer than [`STRIDE`] bytes are supplied.
pub fn decode_record(bytes: &[u8]) -> VertexRecord {
    bytemuck::pod_read_unaligned(&bytes[..STRIDE])
}

// ============================================================================
// Segments
// ============================================================================

/// Named segment of a vertex record
///
/// Each variant covers one byte range of the 36-byte stride. Unlike the
/// historical layout helper this crate replaces, `[24, 36)` maps to
/// `Normal`, its own tag, instead of aliasing the UV range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    /// Texture coordinate, bytes `[0, 8)`
    UvCoord,
    /// Color, bytes `[8, 12)`
    Color,
    /// Position, bytes `[12, 24)`
    Position,
    /// Reserved normal slot, bytes `[24, 36)`
    Normal,
}

impl Segment {
    /// Byte offset of this segment within a record
    pub fn offset(self) -> usize {
        match self {
            Segment::UvCoord => UV_OFFSET,
            Segment::Color => COLOR_OFFSET,
            Segment::Position => POSITION_OFFSET,
            Segment::Normal => NORMAL_OFFSET,
        }
    }

    /// Size of this segment in bytes
    pub fn size_bytes(self) -> usize {
        match self {
            Segment::UvCoord => COLOR_OFFSET - UV_OFFSET,
            Segment::Color => POSITION_OFFSET - COLOR_OFFSET,
            Segment::Position => NORMAL_OFFSET - POSITION_OFFSET,
            Segment::Normal => STRIDE - NORMAL_OFFSET,
        }
    }
}

/// Map an absolute byte position to the segment it falls in
///
/// The mapping is total: every byte of the stride belongs to exactly one
/// segment.
///
/// # Arguments
///
/// * `byte_pos` - Absolute buffer position (taken modulo the stride)
pub fn segment_at(byte_pos: usize) -> Segment {
    let offset = byte_pos % STRIDE;

    if offset < COLOR_OFFSET {
        Segment::UvCoord
    } else if offset < POSITION_OFFSET {
        Segment::Color
    } else if offset < NORMAL_OFFSET {
        Segment::Position
    } else {
        Segment::Normal
    }
}

// ============================================================================
// Color coercion
// ============================================================================

/// Coerce a floating-point color channel in `[0, 1]` to an 8-bit channel
///
/// Multiplies by 255 and truncates toward zero. Deliberately neither rounds
/// nor clamps: inputs above 1.0 wrap through the low byte of the truncated
/// integer and negative inputs wrap the same way. This quirk is part of the
/// on-wire byte contract and must not be "fixed".
pub fn channel_to_byte(channel: f32) -> u8 {
    (255.0_f32 * channel) as i32 as u8
}

/// Unpack a `0xRRGGBBAA` color (most-significant byte first) into channels
pub fn unpack_rgba(packed: u32) -> [u8; 4] {
    [
        (packed >> 24) as u8,
        (packed >> 16) as u8,
        (packed >> 8) as u8,
        packed as u8,
    ]
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[path = "layout_tests.rs"]
mod tests;
