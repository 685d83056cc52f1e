//! Error types for LilyPond conversion
//!
//! Every variant is fatal for the file being converted: the core never
//! skips a token or guesses, because silently dropping or inventing
//! musical content would corrupt the output.

use thiserror::Error;

/// Conversion failure raised by the decoder or the measure assembler
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConversionError {
    /// Unrecognized pitch-class or accidental spelling
    #[error("unrecognized pitch class {0:?}")]
    PitchClass(String),

    /// A slur opened while the previous one is still open
    #[error("slur opened in {0:?} while another slur is still open")]
    UnterminatedSlur(String),

    /// A note token whose duration region is empty
    #[error("note {0:?} has no duration digits")]
    MalformedDuration(String),

    /// One token carries both a slur start and a slur end marker
    #[error("note {0:?} both opens and closes a slur")]
    SlurConflict(String),

    /// A slur end with no slur open in the measure
    #[error("slur closed in {0:?} but no slur is open")]
    DanglingSlurEnd(String),
}
