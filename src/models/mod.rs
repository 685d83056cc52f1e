//! Models module for the converter
//!
//! This module contains the data models shared by the decoder,
//! the measure assembler, and the MEI renderer.

pub mod elements;
pub mod pitch;

// Re-export commonly used types
pub use elements::*;
pub use pitch::PitchClass;
