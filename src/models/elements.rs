//! Element types and enumerations for the converter
//!
//! This module defines the core enums used throughout the
//! LilyPond-to-MEI conversion pipeline.

use serde::{Deserialize, Serialize};

/// The seven letter names a pitched note can carry
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoteName {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
}

impl NoteName {
    /// Look up a lowercase LilyPond pitch letter
    pub fn from_char(c: char) -> Option<NoteName> {
        match c {
            'a' => Some(NoteName::A),
            'b' => Some(NoteName::B),
            'c' => Some(NoteName::C),
            'd' => Some(NoteName::D),
            'e' => Some(NoteName::E),
            'f' => Some(NoteName::F),
            'g' => Some(NoteName::G),
            _ => None,
        }
    }

    /// MEI @pname value (uppercase, matching the output this tool has
    /// always produced)
    pub fn as_str(&self) -> &'static str {
        match self {
            NoteName::A => "A",
            NoteName::B => "B",
            NoteName::C => "C",
            NoteName::D => "D",
            NoteName::E => "E",
            NoteName::F => "F",
            NoteName::G => "G",
        }
    }
}

/// Accidental alteration of a pitch class
///
/// `Natural` never comes out of the pitch decoder; an unaltered pitch
/// simply has no accidental. It exists for displayed accidentals, where
/// the cautionary markers fall back to an explicit natural sign.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Accidental {
    Sharp,
    Flat,
    DoubleSharp,
    DoubleFlat,
    Natural,
}

impl Accidental {
    /// MEI attribute value for this accidental
    pub fn mei_value(&self) -> &'static str {
        match self {
            Accidental::Sharp => "s",
            Accidental::Flat => "f",
            Accidental::DoubleSharp => "ss",
            Accidental::DoubleFlat => "ff",
            Accidental::Natural => "n",
        }
    }
}

/// What the leading alphabetic run of a note token decoded to
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum PitchKind {
    /// Pitched note with a letter name
    Letter(NoteName),

    /// Ordinary rest (`r`)
    Rest,

    /// Full-measure rest (`R`)
    MeasureRest,

    /// Invisible spacer (`s`)
    Space,
}

impl PitchKind {
    /// True for letter-named pitches, false for rest and space kinds
    pub fn is_pitched(&self) -> bool {
        matches!(self, PitchKind::Letter(_))
    }
}

/// Slur role carried on a note
///
/// MEI reserves `i2`/`t2` for phrasing slurs; this converter only ever
/// produces plain slurs.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlurRole {
    /// First note under the slur (`i1`)
    Start,
    /// Last note under the slur (`t1`)
    End,
}

impl SlurRole {
    /// MEI @slur value for this role
    pub fn mei_value(&self) -> &'static str {
        match self {
            SlurRole::Start => "i1",
            SlurRole::End => "t1",
        }
    }
}

/// Which revision of the note-token whitelist to apply
///
/// `Basic` accepts single-character rest and space tokens and knows no
/// accidental-display markers. `Enhanced` drops the rest and space
/// entries from the decoder table and recognizes `!` and `?`.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dialect {
    Basic,
    Enhanced,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_name_lookup() {
        assert_eq!(NoteName::from_char('a'), Some(NoteName::A));
        assert_eq!(NoteName::from_char('g'), Some(NoteName::G));
        assert_eq!(NoteName::from_char('h'), None);
        assert_eq!(NoteName::from_char('A'), None);
    }

    #[test]
    fn test_accidental_mei_values() {
        assert_eq!(Accidental::Sharp.mei_value(), "s");
        assert_eq!(Accidental::DoubleFlat.mei_value(), "ff");
        assert_eq!(Accidental::Natural.mei_value(), "n");
    }

    #[test]
    fn test_slur_role_values() {
        assert_eq!(SlurRole::Start.mei_value(), "i1");
        assert_eq!(SlurRole::End.mei_value(), "t1");
    }
}
