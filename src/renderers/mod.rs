//! Renderers module for the converter
//!
//! This module contains serialization of the assembled document tree.

pub mod mei;

// Re-export commonly used types
pub use mei::emit_mei;
