/// Mock GraphicsBackend for unit tests (no GPU required)
///
/// Records every call as a formatted command string so tests can assert
/// on exact submit sequences, or on the absence of any backend call at
/// all (the zero-vertex draw contract).

#[cfg(test)]
use crate::backend::{ArrayKind, BlendFactor, GraphicsBackend, Topology};

// ============================================================================
// Mock Backend
// ============================================================================

#[cfg(test)]
#[derive(Debug, Default)]
pub struct MockBackend {
    pub commands: Vec<String>,
}

#[cfg(test)]
impl MockBackend {
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    /// Whether any backend call was issued
    pub fn is_untouched(&self) -> bool {
        self.commands.is_empty()
    }
}

#[cfg(test)]
impl GraphicsBackend for MockBackend {
    fn bind_texture(&mut self, id: u32) {
        self.commands.push(format!("bind_texture id={}", id));
    }

    fn set_texturing(&mut self, enabled: bool) {
        self.commands.push(format!("set_texturing {}", enabled));
    }

    fn enable_blending(&mut self, src: BlendFactor, dst: BlendFactor) {
        self.commands
            .push(format!("enable_blending {:?}/{:?}", src, dst));
    }

    fn disable_blending(&mut self) {
        self.commands.push("disable_blending".to_string());
    }

    fn tex_coord_pointer(&mut self, components: u32, stride: usize, data: &[u8]) {
        self.commands.push(format!(
            "tex_coord_pointer components={} stride={} len={}",
            components,
            stride,
            data.len()
        ));
    }

    fn color_pointer(&mut self, components: u32, normalized: bool, stride: usize, data: &[u8]) {
        self.commands.push(format!(
            "color_pointer components={} normalized={} stride={} len={}",
            components,
            normalized,
            stride,
            data.len()
        ));
    }

    fn vertex_pointer(&mut self, components: u32, stride: usize, data: &[u8]) {
        self.commands.push(format!(
            "vertex_pointer components={} stride={} len={}",
            components,
            stride,
            data.len()
        ));
    }

    fn enable_array(&mut self, kind: ArrayKind) {
        self.commands.push(format!("enable_array {:?}", kind));
    }

    fn disable_array(&mut self, kind: ArrayKind) {
        self.commands.push(format!("disable_array {:?}", kind));
    }

    fn draw_arrays(&mut self, topology: Topology, first: usize, count: usize) {
        self.commands.push(format!(
            "draw_arrays {:?} first={} count={}",
            topology, first, count
        ));
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[path = "mock_backend_tests.rs"]
mod tests;
