/// VertexRecorder - accumulates interleaved vertex records and submits them
/// to a graphics backend as one batched draw call

use glam::Vec3;

use crate::backend::{ArrayKind, BlendFactor, GraphicsBackend, Topology};
use crate::error::{Error, Result};
use crate::layout::{self, Segment, COLOR_OFFSET, POSITION_OFFSET, STRIDE, UV_OFFSET};
use crate::region::ByteRegion;
use crate::{recorder_error, recorder_warn};

/// Log source for recorder diagnostics
const SOURCE: &str = "render_batch::VertexRecorder";

/// Default number of scratch regions in the pool
pub const DEFAULT_REGION_COUNT: usize = 1;

/// Default scratch region capacity in bytes (4 MiB)
pub const DEFAULT_REGION_SIZE: usize = 1 << 22;

// ============================================================================
// Configuration
// ============================================================================

/// Recorder configuration
#[derive(Debug, Clone)]
pub struct RecorderConfig {
    /// Number of pre-allocated scratch regions (must be at least 1)
    pub region_count: usize,
    /// Capacity of each scratch region in bytes
    pub region_size: usize,
}

impl Default for RecorderConfig {
    fn default() -> Self {
        Self {
            region_count: DEFAULT_REGION_COUNT,
            region_size: DEFAULT_REGION_SIZE,
        }
    }
}

// ============================================================================
// Active buffer
// ============================================================================

/// Which byte region the current session writes into
///
/// The tagged variant makes detach/extract logic exhaustive: an attached
/// region carries its own bookmark, so restoring the caller's cursor state
/// cannot be forgotten on any path out of the session.
#[derive(Debug)]
enum ActiveBuffer {
    /// Index into the recorder's scratch pool
    Owned(usize),
    /// Externally supplied region, held for one session
    Attached {
        region: ByteRegion,
        saved_position: usize,
        saved_limit: usize,
    },
}

// ============================================================================
// VertexRecorder
// ============================================================================

/// Stateful vertex-buffer recorder
///
/// Accumulates 36-byte interleaved vertex records (see [`crate::layout`])
/// into one active byte region per session, then submits the whole batch
/// with a single backend draw. Sessions are bracketed:
///
/// ```text
/// Idle -> Recording -> {Finalized | Submitted} -> Idle
/// ```
///
/// Single-threaded by design: `busy` is a cooperative re-entrancy guard for
/// a per-frame render loop, not a lock. Recoverable misuse (starting while
/// busy, submitting without a topology) is reported to the diagnostic
/// channel and no-opped instead of panicking.
///
/// # Example
///
/// ```no_run
/// use glam::Vec3;
/// use render_batch::backend::{GraphicsBackend, Topology};
/// use render_batch::recorder::{RecorderConfig, VertexRecorder};
///
/// # fn demo(backend: &mut dyn GraphicsBackend) -> render_batch::Result<()> {
/// let mut recorder = VertexRecorder::new(RecorderConfig::default())?;
///
/// recorder.start_drawing(Topology::Triangles);
/// recorder.set_color_rgba(1.0, 0.0, 0.0, 1.0);
/// recorder.write_vertex_p(Vec3::new(0.0, 0.0, 0.0));
/// recorder.write_vertex_p(Vec3::new(1.0, 0.0, 0.0));
/// recorder.write_vertex_p(Vec3::new(0.0, 1.0, 0.0));
/// recorder.draw(backend);
/// # Ok(())
/// # }
/// ```
pub struct VertexRecorder {
    /// Scratch region pool (fixed at construction, never resized)
    regions: Vec<ByteRegion>,
    /// Region the current session writes into
    active: ActiveBuffer,

    /// True while a recording session is open
    busy: bool,
    /// Topology requested for the session (`None` = unset sentinel)
    draw_mode: Option<Topology>,
    /// When true, implicit attribute segments are skipped over, not written
    skip_mode: bool,

    /// Texturing toggle mirrored to the backend at submit
    use_texture: bool,
    /// Texture id for the backend bind call (0 = untextured)
    current_texture: u32,
    /// Blending toggle mirrored to the backend at submit
    blending: bool,

    /// Sticky default color for write variants that omit color
    current_color: [u8; 4],
    /// Additive translation applied to every subsequently written position
    translation: Vec3,

    /// Vertices written this session
    vertex_count: usize,
    /// First vertex of the slice submitted by `draw`
    render_offset: usize,
    /// Vertices submitted by the last `draw`
    render_count: usize,
}

impl VertexRecorder {
    /// Create a recorder with a freshly allocated scratch pool
    ///
    /// # Arguments
    ///
    /// * `config` - Pool dimensions
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidConfig` if `region_count` is zero. This is
    /// the recorder's only fatal condition; everything after construction
    /// is soft-failure.
    pub fn new(config: RecorderConfig) -> Result<Self> {
        if config.region_count == 0 {
            recorder_error!(SOURCE, "region count must be at least 1");
            return Err(Error::InvalidConfig(
                "region count must be at least 1".to_string(),
            ));
        }

        let regions = (0..config.region_count)
            .map(|_| ByteRegion::with_capacity(config.region_size))
            .collect();

        Ok(Self {
            regions,
            active: ActiveBuffer::Owned(0),
            busy: false,
            draw_mode: None,
            skip_mode: false,
            use_texture: false,
            current_texture: 0,
            blending: false,
            current_color: [0xFF; 4],
            translation: Vec3::ZERO,
            vertex_count: 0,
            render_offset: 0,
            render_count: 0,
        })
    }

    // ========================================================================
    // Session lifecycle
    // ========================================================================

    /// Start a recording session on the pool's first scratch region
    ///
    /// Resets all session state (cursor to 0, counts to zero, toggles off,
    /// color to opaque white, translation to zero, skip mode off) and
    /// records the topology for the eventual draw.
    ///
    /// If a session is already open the call is refused: contention is
    /// reported to the diagnostic channel and no state changes. This is a
    /// per-frame path and must not panic for misuse.
    pub fn start_drawing(&mut self, topology: Topology) {
        if self.busy {
            recorder_warn!(SOURCE, "recorder is currently busy; start_drawing ignored");
            return;
        }
        if self.is_attached() {
            recorder_warn!(
                SOURCE,
                "attached region still held; call finish_editing before starting a session"
            );
            return;
        }

        self.reset();
        self.draw_mode = Some(topology);
        self.busy = true;
    }

    /// Start an in-place editing session on an externally supplied region
    ///
    /// The region's current position and limit are bookmarked and restored
    /// by [`finish_editing`](Self::finish_editing), which also hands the
    /// region back. Skip mode is enabled: bytes the write variants do not
    /// explicitly overwrite are assumed valid and preserved. No topology is
    /// recorded; an attached session is for editing, not submission.
    ///
    /// # Returns
    ///
    /// `None` when the session started; `Some(region)` hands the region
    /// straight back when the call was refused (recorder busy, or a
    /// previously attached region was never detached).
    pub fn attach(&mut self, region: ByteRegion) -> Option<ByteRegion> {
        if self.busy {
            recorder_warn!(SOURCE, "recorder is currently busy; attach ignored");
            return Some(region);
        }
        if self.is_attached() {
            recorder_warn!(
                SOURCE,
                "attached region still held; call finish_editing before attaching another"
            );
            return Some(region);
        }

        self.reset();
        let saved_position = region.position();
        let saved_limit = region.limit();
        self.active = ActiveBuffer::Attached {
            region,
            saved_position,
            saved_limit,
        };
        self.busy = true;
        self.skip_mode = true;
        None
    }

    /// Reset session state to defaults and reselect the first pool region
    fn reset(&mut self) {
        self.active = ActiveBuffer::Owned(0);
        self.regions[0].clear();

        self.busy = false;
        self.draw_mode = None;
        self.skip_mode = false;

        self.use_texture = false;
        self.current_texture = 0;
        self.blending = false;

        self.current_color = [0xFF; 4];
        self.translation = Vec3::ZERO;

        self.vertex_count = 0;
        self.render_offset = 0;
        self.render_count = 0;
    }

    /// Finish an in-place editing session and hand the region back
    ///
    /// Restores the position and limit bookmarked at
    /// [`attach`](Self::attach) time, so the caller gets the region back in
    /// the exact cursor state it supplied it in. Backend toggles enabled
    /// this session are cleared.
    ///
    /// # Errors
    ///
    /// Returns `Error::NoAttachedRegion` when no region is attached.
    pub fn finish_editing(&mut self, backend: &mut dyn GraphicsBackend) -> Result<ByteRegion> {
        match std::mem::replace(&mut self.active, ActiveBuffer::Owned(0)) {
            ActiveBuffer::Attached {
                mut region,
                saved_position,
                saved_limit,
            } => {
                region.set_limit(saved_limit);
                region.set_position(saved_position);
                self.clear_backend_toggles(backend);
                self.busy = false;
                Ok(region)
            }
            owned => {
                self.active = owned;
                recorder_error!(SOURCE, "finish_editing called without an attached region");
                Err(Error::NoAttachedRegion)
            }
        }
    }

    /// Extract the recorded bytes into a new exactly-sized region
    ///
    /// The new region holds bytes `[0, position)` of the active buffer and
    /// comes back flipped (position 0, limit = length). Backend toggles
    /// enabled this session are cleared and the session closes; the scratch
    /// region reverts to the pool for reuse.
    pub fn create_buffer(&mut self, backend: &mut dyn GraphicsBackend) -> ByteRegion {
        let out = ByteRegion::from_vec(self.active_region().written().to_vec());
        self.clear_backend_toggles(backend);
        self.busy = false;
        out
    }

    /// Extract the recorded bytes into a plain byte vector
    ///
    /// Identical selection and copy semantics to
    /// [`create_buffer`](Self::create_buffer); only the container differs.
    pub fn create_array(&mut self, backend: &mut dyn GraphicsBackend) -> Vec<u8> {
        let out = self.active_region().written().to_vec();
        self.clear_backend_toggles(backend);
        self.busy = false;
        out
    }

    /// Submit the recorded batch to the backend as one draw call
    ///
    /// Failure modes, each deliberately non-fatal:
    /// - not busy: reported, no effect
    /// - no topology recorded (e.g. session opened by `attach`): reported,
    ///   session force-closed so the recorder cannot stay stuck busy
    /// - zero vertices: silently closes the session, zero backend calls
    ///
    /// Otherwise submits exactly what was recorded: `render_count` is set
    /// to `vertex_count`, the three interleaved attribute pointers are
    /// declared against the active region (UV at 0, color at 8, position
    /// at 12, stride 36) and one `draw_arrays` is issued over
    /// `[render_offset, render_offset + render_count)`. Texture and
    /// blending toggles enabled this session are turned off afterwards.
    pub fn draw(&mut self, backend: &mut dyn GraphicsBackend) {
        if !self.busy {
            recorder_warn!(SOURCE, "draw called while not recording");
            return;
        }
        let Some(topology) = self.draw_mode else {
            recorder_error!(SOURCE, "draw called with no topology selected; closing session");
            self.busy = false;
            return;
        };
        if self.vertex_count == 0 {
            self.busy = false;
            return;
        }

        self.render_count = self.vertex_count;

        if self.use_texture {
            // Texturing can be on without an id (a textured write variant
            // enabled it); only a nonzero id gets bound
            if self.current_texture != 0 {
                backend.bind_texture(self.current_texture);
            }
            backend.set_texturing(true);
        }

        {
            let bytes = self.active_region().bytes();
            if self.use_texture {
                backend.tex_coord_pointer(2, STRIDE, &bytes[UV_OFFSET..]);
                backend.enable_array(ArrayKind::TexCoord);
            }
            backend.color_pointer(4, true, STRIDE, &bytes[COLOR_OFFSET..]);
            backend.enable_array(ArrayKind::Color);
            backend.vertex_pointer(3, STRIDE, &bytes[POSITION_OFFSET..]);
            backend.enable_array(ArrayKind::Vertex);
        }

        if self.blending {
            backend.enable_blending(BlendFactor::SrcAlpha, BlendFactor::OneMinusSrcAlpha);
        }

        backend.draw_arrays(topology, self.render_offset, self.render_count);

        backend.disable_array(ArrayKind::Vertex);
        backend.disable_array(ArrayKind::Color);
        if self.use_texture {
            backend.disable_array(ArrayKind::TexCoord);
        }

        self.clear_backend_toggles(backend);
        self.busy = false;
    }

    /// Turn off texture/blending at the backend if this session enabled them
    fn clear_backend_toggles(&mut self, backend: &mut dyn GraphicsBackend) {
        if self.use_texture {
            backend.set_texturing(false);
            self.use_texture = false;
        }
        if self.blending {
            backend.disable_blending();
            self.blending = false;
        }
    }

    // ========================================================================
    // Vertex writes
    // ========================================================================

    /// Write one vertex with explicit texture coordinate, color and position
    pub fn write_vertex_tcp(&mut self, u: f32, v: f32, color: [u8; 4], position: Vec3) {
        self.write_record(Some([u, v]), Some(color), position);
    }

    /// Write one vertex with explicit color and position
    pub fn write_vertex_cp(&mut self, color: [u8; 4], position: Vec3) {
        self.write_record(None, Some(color), position);
    }

    /// Write one vertex with explicit texture coordinate and position
    pub fn write_vertex_tp(&mut self, u: f32, v: f32, position: Vec3) {
        self.write_record(Some([u, v]), None, position);
    }

    /// Write one vertex with explicit position only
    pub fn write_vertex_p(&mut self, position: Vec3) {
        self.write_record(None, None, position);
    }

    /// Write exactly one 36-byte record
    ///
    /// The single parameterized write behind all four public variants, so
    /// the skip-vs-default branching and the stride arithmetic exist once.
    /// Implicit attribute groups (a `None` argument): in skip mode the
    /// cursor advances over the segment, preserving existing bytes;
    /// otherwise UV defaults to zeros and color to the sticky current
    /// color. Position always lands as `position + translation` using the
    /// translation in effect now, not at submit time. The normal segment
    /// is zero-filled regardless of mode.
    ///
    /// Supplying a texture coordinate enables the session's texturing
    /// toggle, like the variants it replaced always did.
    fn write_record(&mut self, uv: Option<[f32; 2]>, color: Option<[u8; 4]>, position: Vec3) {
        let skip = self.skip_mode;
        let default_color = self.current_color;
        let translated = position + self.translation;

        if uv.is_some() {
            self.use_texture = true;
        }

        let region = self.active_region_mut();

        match uv {
            Some([u, v]) => {
                region.put_f32(u);
                region.put_f32(v);
            }
            None if skip => region.skip(Segment::UvCoord.size_bytes()),
            None => {
                region.put_f32(0.0);
                region.put_f32(0.0);
            }
        }

        match color {
            Some(channels) => region.put_bytes(&channels),
            None if skip => region.skip(Segment::Color.size_bytes()),
            None => region.put_bytes(&default_color),
        }

        region.put_f32(translated.x);
        region.put_f32(translated.y);
        region.put_f32(translated.z);

        // Reserved normal slot, zero-filled even in skip mode
        region.put_f32(0.0);
        region.put_f32(0.0);
        region.put_f32(0.0);

        self.vertex_count += 1;
    }

    // ========================================================================
    // Attribute setters
    // ========================================================================

    /// Set the sticky default color from `[0, 1]` channels, alpha untouched
    ///
    /// Channels are coerced by truncating multiply (see
    /// [`layout::channel_to_byte`]); out-of-range inputs wrap rather than
    /// clamp, a documented quirk of the byte contract.
    pub fn set_color(&mut self, r: f32, g: f32, b: f32) {
        self.current_color[0] = layout::channel_to_byte(r);
        self.current_color[1] = layout::channel_to_byte(g);
        self.current_color[2] = layout::channel_to_byte(b);
    }

    /// Set the sticky default color from four `[0, 1]` channels
    pub fn set_color_rgba(&mut self, r: f32, g: f32, b: f32, a: f32) {
        self.current_color = [
            layout::channel_to_byte(r),
            layout::channel_to_byte(g),
            layout::channel_to_byte(b),
            layout::channel_to_byte(a),
        ];
    }

    /// Set the sticky default color from a packed `0xRRGGBBAA` value
    pub fn set_color_packed(&mut self, packed: u32) {
        self.current_color = layout::unpack_rgba(packed);
    }

    /// Set only the red channel of the sticky default color
    pub fn set_red(&mut self, r: f32) {
        self.current_color[0] = layout::channel_to_byte(r);
    }

    /// Set only the green channel of the sticky default color
    pub fn set_green(&mut self, g: f32) {
        self.current_color[1] = layout::channel_to_byte(g);
    }

    /// Set only the blue channel of the sticky default color
    pub fn set_blue(&mut self, b: f32) {
        self.current_color[2] = layout::channel_to_byte(b);
    }

    /// Set only the alpha channel of the sticky default color
    pub fn set_alpha(&mut self, a: f32) {
        self.current_color[3] = layout::channel_to_byte(a);
    }

    /// Select the texture for the session's draw
    ///
    /// Id 0 means "no texture" and clears the texturing toggle; any nonzero
    /// id enables it and is bound at submit time.
    pub fn set_texture(&mut self, id: u32) {
        self.use_texture = id != 0;
        self.current_texture = id;
    }

    /// Set the additive translation applied to subsequently written positions
    pub fn set_translation(&mut self, translation: Vec3) {
        self.translation = translation;
    }

    /// Accumulate onto the current translation
    pub fn add_translation(&mut self, translation: Vec3) {
        self.translation += translation;
    }

    /// Enable or disable blending for the session's draw
    pub fn set_blending(&mut self, enabled: bool) {
        self.blending = enabled;
    }

    /// Enable or disable skip mode
    ///
    /// In skip mode, attribute segments a write variant does not supply are
    /// stepped over instead of overwritten with defaults, preserving data
    /// already present in the buffer.
    pub fn set_skip_mode(&mut self, enabled: bool) {
        self.skip_mode = enabled;
    }

    /// Set the first vertex of the slice submitted by `draw`
    pub fn set_render_offset(&mut self, offset: usize) {
        self.render_offset = offset;
    }

    // ========================================================================
    // Raw cursor and byte operations
    // ========================================================================
    //
    // The in-place patching surface: advanced callers position the cursor
    // on a previously written vertex (set_aligned_pos) and rewrite or read
    // individual attribute bytes.

    /// Append one raw byte at the cursor
    pub fn write_u8(&mut self, value: u8) {
        self.active_region_mut().put_u8(value);
    }

    /// Append one raw little-endian f32 at the cursor
    pub fn write_f32(&mut self, value: f32) {
        self.active_region_mut().put_f32(value);
    }

    /// Append one zero byte at the cursor
    pub fn write_zero_u8(&mut self) {
        self.active_region_mut().put_u8(0);
    }

    /// Append one zero f32 at the cursor
    pub fn write_zero_f32(&mut self) {
        self.active_region_mut().put_f32(0.0);
    }

    /// Read one raw byte at the cursor
    pub fn read_u8(&mut self) -> u8 {
        self.active_region_mut().read_u8()
    }

    /// Read one raw little-endian f32 at the cursor
    pub fn read_f32(&mut self) -> f32 {
        self.active_region_mut().read_f32()
    }

    /// Current cursor position in bytes
    pub fn buffer_pos(&self) -> usize {
        self.active_region().position()
    }

    /// Move the cursor to an absolute byte position
    pub fn set_buffer_pos(&mut self, position: usize) {
        self.active_region_mut().set_position(position);
    }

    /// Move the cursor to the start of the given vertex record
    pub fn set_vertex_pos(&mut self, vertex_index: usize) {
        self.active_region_mut().set_position(vertex_index * STRIDE);
    }

    /// Index of the vertex record the cursor currently falls in
    pub fn vertex_index(&self) -> usize {
        self.active_region().position() / STRIDE
    }

    /// Segment of the vertex record the cursor currently falls in
    pub fn buffer_alignment(&self) -> Segment {
        layout::segment_at(self.active_region().position())
    }

    /// Seek to the given segment of the vertex record the cursor is in
    pub fn align_to(&mut self, segment: Segment) {
        let index = self.vertex_index();
        self.set_aligned_pos(index, segment);
    }

    /// Seek to the given segment of the given vertex record
    ///
    /// Seeking to [`Segment::Normal`] works but is reported: the normal
    /// slot is reserved and nothing ever writes non-zero data there.
    pub fn set_aligned_pos(&mut self, vertex_index: usize, segment: Segment) {
        if segment == Segment::Normal {
            recorder_warn!(SOURCE, "normals are reserved; nothing writes them yet");
        }
        self.active_region_mut()
            .set_position(vertex_index * STRIDE + segment.offset());
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Whether a recording session is open
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Whether an externally attached region is currently held
    pub fn is_attached(&self) -> bool {
        matches!(self.active, ActiveBuffer::Attached { .. })
    }

    /// Whether skip mode is active
    pub fn is_skip_mode(&self) -> bool {
        self.skip_mode
    }

    /// Vertices written this session
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Topology recorded for the session, if any
    pub fn draw_mode(&self) -> Option<Topology> {
        self.draw_mode
    }

    /// Sticky default color
    pub fn current_color(&self) -> [u8; 4] {
        self.current_color
    }

    /// Translation currently applied to written positions
    pub fn translation(&self) -> Vec3 {
        self.translation
    }

    /// Number of scratch regions in the pool
    pub fn region_count(&self) -> usize {
        self.regions.len()
    }

    /// The region the current session writes into
    fn active_region(&self) -> &ByteRegion {
        match &self.active {
            ActiveBuffer::Owned(index) => &self.regions[*index],
            ActiveBuffer::Attached { region, .. } => region,
        }
    }

    fn active_region_mut(&mut self) -> &mut ByteRegion {
        match &mut self.active {
            ActiveBuffer::Owned(index) => &mut self.regions[*index],
            ActiveBuffer::Attached { region, .. } => region,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[path = "recorder_tests.rs"]
mod tests;

#[cfg(test)]
#[path = "draw_tests.rs"]
mod draw_tests;
