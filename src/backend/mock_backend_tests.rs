//! Unit tests for mock_backend.rs

use super::*;
use crate::backend::{ArrayKind, BlendFactor, GraphicsBackend, Topology};

#[test]
fn test_new_is_untouched() {
    let backend = MockBackend::new();
    assert!(backend.is_untouched());
}

#[test]
fn test_records_command_sequence() {
    let mut backend = MockBackend::new();
    backend.bind_texture(3);
    backend.set_texturing(true);
    backend.enable_array(ArrayKind::Vertex);
    backend.draw_arrays(Topology::Triangles, 0, 6);
    backend.disable_array(ArrayKind::Vertex);

    assert_eq!(
        backend.commands,
        vec![
            "bind_texture id=3",
            "set_texturing true",
            "enable_array Vertex",
            "draw_arrays Triangles first=0 count=6",
            "disable_array Vertex",
        ]
    );
}

#[test]
fn test_records_pointer_declarations() {
    let mut backend = MockBackend::new();
    let data = [0_u8; 72];
    backend.tex_coord_pointer(2, 36, &data);
    backend.color_pointer(4, true, 36, &data[8..]);
    backend.vertex_pointer(3, 36, &data[12..]);

    assert_eq!(
        backend.commands,
        vec![
            "tex_coord_pointer components=2 stride=36 len=72",
            "color_pointer components=4 normalized=true stride=36 len=64",
            "vertex_pointer components=3 stride=36 len=60",
        ]
    );
}

#[test]
fn test_records_blending() {
    let mut backend = MockBackend::new();
    backend.enable_blending(BlendFactor::SrcAlpha, BlendFactor::OneMinusSrcAlpha);
    backend.disable_blending();

    assert_eq!(
        backend.commands,
        vec![
            "enable_blending SrcAlpha/OneMinusSrcAlpha",
            "disable_blending",
        ]
    );
}
