//! Note-block building
//!
//! Consumes one whitespace-delimited token and produces one note element,
//! updating the measure's slur state as slur markers are seen. The scan
//! order matters: the pitch-class boundary is found first, then octave
//! marks and display markers up to the first digit, then the duration
//! digits themselves.

use crate::mei::ids::IdAllocator;
use crate::mei::types::{DisplayedAccidental, NoteElement, SlurSpan};
use crate::models::{Accidental, Dialect, PitchClass, SlurRole};

use super::errors::ConversionError;
use super::pitch_class::decode_pitch_class;

/// Open-slur state, owned by the measure assembler for the lifetime of
/// one measure and passed into every note-block call.
#[derive(Debug, Default)]
pub struct SlurState {
    open: Option<OpenSlur>,
}

#[derive(Debug)]
struct OpenSlur {
    id: String,
    start_id: String,
    participants: Vec<String>,
}

impl SlurState {
    /// Fresh state with no slur open
    pub fn new() -> Self {
        Self::default()
    }

    /// True while a slur start has been seen but not yet closed
    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }
}

/// Result of building one note block
#[derive(Debug)]
pub struct NoteBlock {
    /// The decoded note
    pub note: NoteElement,

    /// A slur span, present only when this token closed one
    pub closed_slur: Option<SlurSpan>,
}

/// Build one note element from a token.
///
/// On a slur start the state records the new span; on a slur end the
/// span is completed and returned so the caller can append it right
/// after the note. Notes inside an open slur join its participant list.
pub fn build_note_block(
    token: &str,
    dialect: Dialect,
    ids: &mut dyn IdAllocator,
    slurs: &mut SlurState,
) -> Result<NoteBlock, ConversionError> {
    let boundary = token
        .char_indices()
        .find(|(_, c)| is_pitch_terminator(*c, dialect))
        .map(|(i, _)| i)
        .unwrap_or(token.len());
    let pitch = decode_pitch_class(&token[..boundary], dialect)?;

    // Octave marks and display markers run up to the first digit. Other
    // characters in this range (accidental suffix letters, slur markers)
    // carry no octave meaning and are skipped.
    let mut octave: i8 = 3;
    let mut display = None;
    let mut stopped_at = 0;
    for (i, c) in token.char_indices().skip(1) {
        if c.is_ascii_digit() {
            stopped_at = i;
            break;
        }
        match c {
            ',' => octave -= 1,
            '\'' => octave += 1,
            '!' if dialect == Dialect::Enhanced => {
                display = Some(DisplayedAccidental::Forced(displayed_value(&pitch)));
            }
            '?' if dialect == Dialect::Enhanced => {
                display = Some(DisplayedAccidental::Cautionary {
                    id: ids.next_id(),
                    value: displayed_value(&pitch),
                });
            }
            _ => {}
        }
    }

    let duration: String = token[stopped_at..]
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    if duration.is_empty() {
        return Err(ConversionError::MalformedDuration(token.to_string()));
    }

    let slur = match (token.contains('('), token.contains(')')) {
        (true, true) => return Err(ConversionError::SlurConflict(token.to_string())),
        (true, false) => Some(SlurRole::Start),
        (false, true) => Some(SlurRole::End),
        (false, false) => None,
    };

    let note = NoteElement {
        id: ids.next_id(),
        pitch: pitch.kind,
        accid_ges: pitch.accidental,
        display,
        octave,
        duration,
        slur,
    };

    let closed_slur = match slur {
        Some(SlurRole::Start) => {
            if slurs.open.is_some() {
                return Err(ConversionError::UnterminatedSlur(token.to_string()));
            }
            slurs.open = Some(OpenSlur {
                id: ids.next_id(),
                start_id: note.id.clone(),
                participants: vec![note.id.clone()],
            });
            None
        }
        Some(SlurRole::End) => {
            let mut open = slurs
                .open
                .take()
                .ok_or_else(|| ConversionError::DanglingSlurEnd(token.to_string()))?;
            open.participants.push(note.id.clone());
            Some(SlurSpan {
                id: open.id,
                start_id: open.start_id,
                end_id: note.id.clone(),
                participants: open.participants,
            })
        }
        None => {
            if let Some(open) = slurs.open.as_mut() {
                open.participants.push(note.id.clone());
            }
            None
        }
    };

    Ok(NoteBlock { note, closed_slur })
}

/// Characters that end the pitch-class region of a token
fn is_pitch_terminator(c: char, dialect: Dialect) -> bool {
    match c {
        ',' | '\'' => true,
        '!' | '?' => dialect == Dialect::Enhanced,
        _ => c.is_ascii_digit(),
    }
}

/// Displayed value for the cautionary markers: the sounding accidental,
/// or an explicit natural when the pitch is unaltered.
fn displayed_value(pitch: &PitchClass) -> Accidental {
    pitch.accidental.unwrap_or(Accidental::Natural)
}
