//! Parsing module for the converter
//!
//! This module contains the decision logic of the pipeline: pitch-class
//! decoding, note-block building and measure assembly.

pub mod errors;
pub mod measure;
pub mod note_block;
pub mod pitch_class;

// Re-export commonly used types
pub use errors::ConversionError;
pub use measure::assemble_measure;
pub use note_block::{build_note_block, NoteBlock, SlurState};
pub use pitch_class::decode_pitch_class;
