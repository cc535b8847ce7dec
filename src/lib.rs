/*!
# render_batch

Interleaved vertex-buffer recorder for batched draw submission.

This crate accumulates per-vertex attribute data (texture coordinate,
color, position, and a reserved normal slot) into a single contiguous
36-byte-stride byte buffer, then submits the whole batch to a graphics
backend as one draw call. It exists to avoid per-vertex API calls: build
the interleaved array in host memory, issue one draw per shape batch.

## Architecture

- **VertexRecorder**: the core; owns a pool of scratch byte regions and
  one recording session at a time (begin / record / finish / submit)
- **ByteRegion**: fixed-capacity byte buffer with position/limit cursor
  discipline, the recorder's storage primitive
- **GraphicsBackend**: trait consumed at submit time; backend
  implementations bind textures, declare the three interleaved attribute
  pointers and issue the draw
- **layout**: the bit-exact binary contract (stride arithmetic, segment
  mapping, color coercion)

The recorder is single-threaded by design: its `busy` flag is a
cooperative re-entrancy guard for a per-frame render loop, not a lock.
Recoverable misuse is reported to the logging system instead of
panicking.
*/

// Internal modules
mod error;
pub mod backend;
pub mod layout;
pub mod log;
pub mod recorder;
pub mod region;

// Error types
pub use error::{Error, Result};

// Core types at the crate root
pub use backend::{ArrayKind, BlendFactor, GraphicsBackend, Topology};
pub use recorder::{RecorderConfig, VertexRecorder};
pub use region::ByteRegion;

// Re-export math library at crate root
pub use glam;
