/// GraphicsBackend trait - the draw-submission interface

// ============================================================================
// Common types
// ============================================================================

/// Primitive assembly mode for a draw call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topology {
    /// Independent triangle list
    Triangles,
    /// Independent quad list
    Quads,
}

/// Blend factor for source/destination blending
///
/// Only the factors the recorder actually submits are modeled. The default
/// pair is `SrcAlpha` / `OneMinusSrcAlpha`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlendFactor {
    /// Source alpha
    SrcAlpha,
    /// One minus source alpha
    OneMinusSrcAlpha,
    /// Constant one
    One,
    /// Constant zero
    Zero,
}

/// Client-side vertex attribute stream
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrayKind {
    /// Texture coordinate array
    TexCoord,
    /// Color array
    Color,
    /// Vertex position array
    Vertex,
}

// ============================================================================
// GraphicsBackend trait
// ============================================================================

/// Graphics backend consumed by the recorder at submit time
///
/// Implemented by backend-specific drawers (a fixed-function GL backend,
/// a capture backend, etc.). The recorder never stores a backend; one is
/// passed in for the duration of a single `draw`/finalize call, keeping
/// the recorder single-threaded and lock-free.
///
/// Methods are infallible: they model fire-and-forget state calls, and the
/// submit path must never fail inside a per-frame loop.
pub trait GraphicsBackend {
    /// Bind a numeric texture id (0 is never passed; id 0 means untextured
    /// and the recorder skips the bind entirely)
    fn bind_texture(&mut self, id: u32);

    /// Enable or disable the texturing mode
    fn set_texturing(&mut self, enabled: bool);

    /// Enable blending with the given source/destination factor pair
    fn enable_blending(&mut self, src: BlendFactor, dst: BlendFactor);

    /// Disable blending
    fn disable_blending(&mut self);

    /// Declare the texture-coordinate stream
    ///
    /// # Arguments
    ///
    /// * `components` - Floats per vertex (always 2 for this layout)
    /// * `stride` - Byte distance between consecutive records
    /// * `data` - Buffer bytes starting at the first UV value
    fn tex_coord_pointer(&mut self, components: u32, stride: usize, data: &[u8]);

    /// Declare the color stream
    ///
    /// # Arguments
    ///
    /// * `components` - Channels per vertex (always 4 for this layout)
    /// * `normalized` - Whether integer channels are normalized to `[0, 1]`
    /// * `stride` - Byte distance between consecutive records
    /// * `data` - Buffer bytes starting at the first color channel
    fn color_pointer(&mut self, components: u32, normalized: bool, stride: usize, data: &[u8]);

    /// Declare the position stream
    ///
    /// # Arguments
    ///
    /// * `components` - Floats per vertex (always 3 for this layout)
    /// * `stride` - Byte distance between consecutive records
    /// * `data` - Buffer bytes starting at the first position value
    fn vertex_pointer(&mut self, components: u32, stride: usize, data: &[u8]);

    /// Enable a declared attribute stream
    fn enable_array(&mut self, kind: ArrayKind);

    /// Disable an attribute stream
    fn disable_array(&mut self, kind: ArrayKind);

    /// Draw `count` vertices of the given topology starting at vertex `first`
    fn draw_arrays(&mut self, topology: Topology, first: usize, count: usize);
}
