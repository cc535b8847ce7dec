/// Backend module - graphics backend trait and related types

// Module declarations
pub mod backend;
pub mod mock_backend;

// Re-export everything from backend.rs
pub use backend::*;

#[cfg(test)]
pub use mock_backend::*;
