/// Recorder module - session state machine and vertex-write surface

// Module declarations
pub mod recorder;

// Re-export everything from recorder.rs
pub use recorder::*;
