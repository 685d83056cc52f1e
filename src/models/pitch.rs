//! Decoded pitch-class pair
//!
//! The pitch decoder reduces the leading alphabetic run of a note token
//! to this pair; everything positional (octave marks, duration digits,
//! slur markers) is handled later by the note-block builder.

use serde::{Deserialize, Serialize};

use super::elements::{Accidental, NoteName, PitchKind};

/// Pitch class as decoded from a note token
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct PitchClass {
    /// Letter name, or one of the rest/space kinds
    pub kind: PitchKind,

    /// Sounding accidental; `None` for an unaltered pitch or a rest kind
    pub accidental: Option<Accidental>,
}

impl PitchClass {
    /// A letter-named pitch, possibly altered
    pub fn pitched(name: NoteName, accidental: Option<Accidental>) -> Self {
        Self {
            kind: PitchKind::Letter(name),
            accidental,
        }
    }

    /// A rest or space kind, which never carries an accidental
    pub fn unpitched(kind: PitchKind) -> Self {
        Self {
            kind,
            accidental: None,
        }
    }
}
