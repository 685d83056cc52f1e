//! MEI document tree
//!
//! Typed representation of the fixed document shape this converter
//! produces: mei > music > body > score > section > measure* > staff >
//! layer > (note | rest | slur)*. The renderer consumes this tree; the
//! serde derives exist for debug dumps of the document model.

use serde::{Deserialize, Serialize};

use crate::models::{Accidental, PitchKind, SlurRole};

/// MEI namespace URI placed on the document root
pub const MEI_NS: &str = "http://www.music-encoding.org/ns/mei";

/// Value of the @meiversion attribute on the document root
pub const MEI_VERSION: &str = "2013";

/// One decoded musical event
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct NoteElement {
    /// xml:id, unique across the whole document
    pub id: String,

    /// Letter name or rest/space kind
    pub pitch: PitchKind,

    /// Sounding accidental (@accid.ges)
    pub accid_ges: Option<Accidental>,

    /// Displayed accidental, present only when a display marker forced one
    pub display: Option<DisplayedAccidental>,

    /// Octave number; 3 unless comma/apostrophe marks shifted it
    pub octave: i8,

    /// Duration digits exactly as written (e.g. "4", "16")
    pub duration: String,

    /// Slur role when this note opens or closes a slur
    pub slur: Option<SlurRole>,
}

/// How a displayed accidental is rendered
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub enum DisplayedAccidental {
    /// @accid attribute on the note itself (`!` marker)
    Forced(Accidental),

    /// Child accid element with func="caution" (`?` marker)
    Cautionary {
        /// xml:id of the sub-element
        id: String,
        /// Accidental value shown to the reader
        value: Accidental,
    },
}

/// A closed slur, emitted into the layer after its end note
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SlurSpan {
    /// xml:id of the slur element itself
    pub id: String,

    /// xml:id of the note that opened the slur
    pub start_id: String,

    /// xml:id of the note that closed the slur
    pub end_id: String,

    /// Every participating note id in order, start and end included
    pub participants: Vec<String>,
}

/// One event in a layer, in document order
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub enum LayerEvent {
    Note(NoteElement),
    Slur(SlurSpan),
}

/// Single-voice layer holding the measure's events
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Layer {
    pub id: String,
    /// Voice number, fixed at 1
    pub n: u8,
    pub events: Vec<LayerEvent>,
}

/// Single staff wrapping the layer
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Staff {
    pub id: String,
    /// Staff number, fixed at 1
    pub n: u8,
    pub layer: Layer,
}

/// One measure of music
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct MeasureElement {
    pub id: String,

    /// 1-based position among the source's bar-delimited segments,
    /// assigned by the score converter
    pub number: Option<u32>,

    pub staff: Staff,
}

impl MeasureElement {
    /// The measure's events in document order
    pub fn events(&self) -> &[LayerEvent] {
        &self.staff.layer.events
    }

    /// Iterate the notes of this measure, skipping slur spans
    pub fn notes(&self) -> impl Iterator<Item = &NoteElement> {
        self.events().iter().filter_map(|e| match e {
            LayerEvent::Note(n) => Some(n),
            LayerEvent::Slur(_) => None,
        })
    }

    /// Iterate the slur spans of this measure
    pub fn slurs(&self) -> impl Iterator<Item = &SlurSpan> {
        self.events().iter().filter_map(|e| match e {
            LayerEvent::Slur(s) => Some(s),
            LayerEvent::Note(_) => None,
        })
    }
}

/// Complete document: the fixed wrapper chain down to the measure list
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct MeiDocument {
    /// xml:id of the mei root
    pub id: String,
    pub music_id: String,
    pub body_id: String,
    pub score_id: String,
    pub section_id: String,
    pub measures: Vec<MeasureElement>,
}

impl MeiDocument {
    /// Every xml:id in the document, in document order
    ///
    /// Used by the diagnostics pass to verify document-wide uniqueness.
    pub fn element_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = vec![
            &self.id,
            &self.music_id,
            &self.body_id,
            &self.score_id,
            &self.section_id,
        ];
        for measure in &self.measures {
            ids.push(&measure.id);
            ids.push(&measure.staff.id);
            ids.push(&measure.staff.layer.id);
            for event in measure.events() {
                match event {
                    LayerEvent::Note(note) => {
                        ids.push(&note.id);
                        if let Some(DisplayedAccidental::Cautionary { id, .. }) = &note.display {
                            ids.push(id);
                        }
                    }
                    LayerEvent::Slur(span) => ids.push(&span.id),
                }
            }
        }
        ids
    }
}
