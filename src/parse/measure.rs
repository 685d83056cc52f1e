//! Measure assembly
//!
//! Iterates the tokens of one measure, invokes the note-block builder
//! for each, and wraps the resulting event sequence in the fixed
//! layer > staff > measure structure.

use crate::mei::ids::IdAllocator;
use crate::mei::types::{Layer, LayerEvent, MeasureElement, Staff};
use crate::models::Dialect;

use super::errors::ConversionError;
use super::note_block::{build_note_block, SlurState};

/// Assemble one measure's worth of tokens.
///
/// Returns `None` when the segment holds no tokens at all, so the caller
/// can drop the empty trailing segment a bar-check produces instead of
/// emitting a zero-event measure. The measure number is left unset; only
/// the caller knows the segment's position in the source.
pub fn assemble_measure(
    markup: &str,
    dialect: Dialect,
    ids: &mut dyn IdAllocator,
) -> Result<Option<MeasureElement>, ConversionError> {
    let mut events = Vec::new();
    let mut slurs = SlurState::new();

    for token in markup.split_whitespace() {
        let block = build_note_block(token, dialect, ids, &mut slurs)?;
        events.push(LayerEvent::Note(block.note));
        if let Some(span) = block.closed_slur {
            events.push(LayerEvent::Slur(span));
        }
    }

    if events.is_empty() {
        return Ok(None);
    }

    let layer = Layer {
        id: ids.next_id(),
        n: 1,
        events,
    };
    let staff = Staff {
        id: ids.next_id(),
        n: 1,
        layer,
    };
    Ok(Some(MeasureElement {
        id: ids.next_id(),
        number: None,
        staff,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mei::ids::SequentialIdAllocator;
    use crate::mei::types::LayerEvent;
    use crate::models::{NoteName, PitchKind, SlurRole};

    fn assemble(markup: &str) -> Result<Option<MeasureElement>, ConversionError> {
        let mut ids = SequentialIdAllocator::new("m");
        assemble_measure(markup, Dialect::Basic, &mut ids)
    }

    #[test]
    fn test_empty_segment_is_absent() {
        assert_eq!(assemble("").unwrap(), None);
        assert_eq!(assemble("   \n  ").unwrap(), None);
    }

    #[test]
    fn test_single_voice_wrappers() {
        let measure = assemble("c4 d4").unwrap().unwrap();
        assert_eq!(measure.staff.n, 1);
        assert_eq!(measure.staff.layer.n, 1);
        assert_eq!(measure.number, None);
        assert_eq!(measure.notes().count(), 2);
    }

    #[test]
    fn test_slur_span_follows_its_end_note() {
        let measure = assemble("a4( b'16 c,,2)").unwrap().unwrap();
        let events = measure.events();
        assert_eq!(events.len(), 4);

        let notes: Vec<_> = measure.notes().collect();
        assert_eq!(notes[0].pitch, PitchKind::Letter(NoteName::A));
        assert_eq!(notes[0].slur, Some(SlurRole::Start));
        assert_eq!(notes[1].slur, None);
        assert_eq!(notes[2].slur, Some(SlurRole::End));

        match &events[3] {
            LayerEvent::Slur(span) => {
                assert_eq!(span.start_id, notes[0].id);
                assert_eq!(span.end_id, notes[2].id);
                assert_eq!(
                    span.participants,
                    vec![notes[0].id.clone(), notes[1].id.clone(), notes[2].id.clone()]
                );
            }
            other => panic!("expected a slur span, got {other:?}"),
        }
    }

    #[test]
    fn test_builder_errors_propagate() {
        assert_eq!(
            assemble("c4 z4").unwrap_err(),
            ConversionError::PitchClass("z".to_string())
        );
        assert_eq!(
            assemble("a4( b4( c4)").unwrap_err(),
            ConversionError::UnterminatedSlur("b4(".to_string())
        );
    }

    #[test]
    fn test_open_slur_at_measure_end_is_kept_open() {
        // No error here: the document diagnostics flag the dangling
        // start after assembly.
        let measure = assemble("a4( b4").unwrap().unwrap();
        assert_eq!(measure.slurs().count(), 0);
        assert_eq!(
            measure.notes().next().unwrap().slur,
            Some(SlurRole::Start)
        );
    }
}
