//! Unit tests for layout.rs
//!
//! Verifies the 36-byte stride contract, segment mapping (including the
//! normal range getting its own tag), color coercion truncation and
//! packed-color decoding.

use super::*;

// ============================================================================
// STRIDE AND OFFSETS
// ============================================================================

#[test]
fn test_stride_is_36_bytes() {
    assert_eq!(STRIDE, 36);
    assert_eq!(std::mem::size_of::<VertexRecord>(), STRIDE);
}

#[test]
fn test_segment_offsets() {
    assert_eq!(Segment::UvCoord.offset(), 0);
    assert_eq!(Segment::Color.offset(), 8);
    assert_eq!(Segment::Position.offset(), 12);
    assert_eq!(Segment::Normal.offset(), 24);
}

#[test]
fn test_segment_sizes_cover_the_stride() {
    assert_eq!(Segment::UvCoord.size_bytes(), 8);
    assert_eq!(Segment::Color.size_bytes(), 4);
    assert_eq!(Segment::Position.size_bytes(), 12);
    assert_eq!(Segment::Normal.size_bytes(), 12);

    let total: usize = [
        Segment::UvCoord,
        Segment::Color,
        Segment::Position,
        Segment::Normal,
    ]
    .iter()
    .map(|seg| seg.size_bytes())
    .sum();
    assert_eq!(total, STRIDE);
}

#[test]
fn test_vertex_record_field_offsets_match_constants() {
    assert_eq!(std::mem::offset_of!(VertexRecord, uv), UV_OFFSET);
    assert_eq!(std::mem::offset_of!(VertexRecord, color), COLOR_OFFSET);
    assert_eq!(std::mem::offset_of!(VertexRecord, position), POSITION_OFFSET);
    assert_eq!(std::mem::offset_of!(VertexRecord, normal), NORMAL_OFFSET);
}

// ============================================================================
// SEGMENT MAPPING
// ============================================================================

#[test]
fn test_segment_at_first_record() {
    for pos in 0..8 {
        assert_eq!(segment_at(pos), Segment::UvCoord, "byte {}", pos);
    }
    for pos in 8..12 {
        assert_eq!(segment_at(pos), Segment::Color, "byte {}", pos);
    }
    for pos in 12..24 {
        assert_eq!(segment_at(pos), Segment::Position, "byte {}", pos);
    }
    // The normal range is its own segment, not an alias of UvCoord
    for pos in 24..36 {
        assert_eq!(segment_at(pos), Segment::Normal, "byte {}", pos);
    }
}

#[test]
fn test_segment_at_wraps_by_stride() {
    assert_eq!(segment_at(36), Segment::UvCoord);
    assert_eq!(segment_at(36 + 8), Segment::Color);
    assert_eq!(segment_at(5 * 36 + 12), Segment::Position);
    assert_eq!(segment_at(7 * 36 + 24), Segment::Normal);
}

// ============================================================================
// COLOR COERCION
// ============================================================================

#[test]
fn test_channel_to_byte_endpoints() {
    assert_eq!(channel_to_byte(0.0), 0);
    assert_eq!(channel_to_byte(1.0), 255);
}

#[test]
fn test_channel_to_byte_truncates_not_rounds() {
    // 0.5 * 255 = 127.5 -> truncates to 127, not 128
    assert_eq!(channel_to_byte(0.5), 127);
    // 0.999 * 255 = 254.745 -> 254
    assert_eq!(channel_to_byte(0.999), 254);
}

#[test]
fn test_channel_to_byte_out_of_range_wraps() {
    // 1.5 * 255 = 382.5 -> 382 -> low byte 126 (no clamping)
    assert_eq!(channel_to_byte(1.5), 126);
    // -0.5 * 255 = -127.5 -> -127 -> 129 as u8
    assert_eq!(channel_to_byte(-0.5), 129);
}

// ============================================================================
// PACKED COLOR
// ============================================================================

#[test]
fn test_unpack_rgba_channel_order() {
    assert_eq!(unpack_rgba(0xFF000000), [255, 0, 0, 0]);
    assert_eq!(unpack_rgba(0x00FF0000), [0, 255, 0, 0]);
    assert_eq!(unpack_rgba(0x0000FF00), [0, 0, 255, 0]);
    assert_eq!(unpack_rgba(0x000000FF), [0, 0, 0, 255]);
    assert_eq!(unpack_rgba(0x11223344), [0x11, 0x22, 0x33, 0x44]);
}

// ============================================================================
// RECORD DECODE
// ============================================================================

#[test]
fn test_decode_record_round_trip() {
    let record = VertexRecord {
        uv: [0.25, 0.75],
        color: [10, 20, 30, 40],
        position: [1.0, -2.0, 3.5],
        normal: [0.0, 0.0, 0.0],
    };
    let bytes = bytemuck::bytes_of(&record);
    assert_eq!(bytes.len(), STRIDE);
    assert_eq!(decode_record(bytes), record);
}

#[test]
fn test_decode_record_matches_manual_layout() {
    let mut bytes = [0_u8; STRIDE];
    bytes[0..4].copy_from_slice(&0.5_f32.to_le_bytes());
    bytes[4..8].copy_from_slice(&1.0_f32.to_le_bytes());
    bytes[8..12].copy_from_slice(&[255, 0, 0, 255]);
    bytes[12..16].copy_from_slice(&4.0_f32.to_le_bytes());
    bytes[16..20].copy_from_slice(&5.0_f32.to_le_bytes());
    bytes[20..24].copy_from_slice(&6.0_f32.to_le_bytes());

    let record = decode_record(&bytes);
    assert_eq!(record.uv, [0.5, 1.0]);
    assert_eq!(record.color, [255, 0, 0, 255]);
    assert_eq!(record.position, [4.0, 5.0, 6.0]);
    assert_eq!(record.normal, [0.0, 0.0, 0.0]);
}
