//! MEI emitter - consumes the document tree and emits MEI strings
//!
//! Serialization is the last step of the pipeline and carries no
//! decisions of its own: the tree is walked top-down into an indented
//! string with a fixed attribute order per element.

use crate::mei::types::{
    DisplayedAccidental, LayerEvent, MeasureElement, MeiDocument, NoteElement, SlurSpan, MEI_NS,
    MEI_VERSION,
};
use crate::models::PitchKind;

use super::builder::MeiBuilder;

/// Emit a complete MEI document as a pretty-printed XML string
pub fn emit_mei(doc: &MeiDocument) -> String {
    let mut builder = MeiBuilder::new();
    builder.open(
        "mei",
        &[
            ("xmlns", MEI_NS),
            ("meiversion", MEI_VERSION),
            ("xml:id", &doc.id),
        ],
    );
    builder.open("music", &[("xml:id", &doc.music_id)]);
    builder.open("body", &[("xml:id", &doc.body_id)]);
    builder.open("score", &[("xml:id", &doc.score_id)]);
    builder.open("section", &[("xml:id", &doc.section_id)]);

    for measure in &doc.measures {
        emit_measure(&mut builder, measure);
    }

    builder.close("section");
    builder.close("score");
    builder.close("body");
    builder.close("music");
    builder.close("mei");
    builder.finalize()
}

fn emit_measure(builder: &mut MeiBuilder, measure: &MeasureElement) {
    let number = measure.number.map(|n| n.to_string());
    let mut attrs: Vec<(&str, &str)> = Vec::new();
    if let Some(n) = number.as_deref() {
        attrs.push(("n", n));
    }
    attrs.push(("xml:id", &measure.id));
    builder.open("measure", &attrs);

    let staff = &measure.staff;
    let staff_n = staff.n.to_string();
    let layer_n = staff.layer.n.to_string();
    builder.open("staff", &[("n", &staff_n), ("xml:id", &staff.id)]);
    builder.open("layer", &[("n", &layer_n), ("xml:id", &staff.layer.id)]);

    for event in &staff.layer.events {
        match event {
            LayerEvent::Note(note) => emit_note(builder, note),
            LayerEvent::Slur(span) => emit_slur(builder, span),
        }
    }

    builder.close("layer");
    builder.close("staff");
    builder.close("measure");
}

fn emit_note(builder: &mut MeiBuilder, note: &NoteElement) {
    let octave = note.octave.to_string();
    let slur = note.slur.map(|role| role.mei_value());

    match note.pitch {
        PitchKind::Letter(name) => {
            let mut attrs: Vec<(&str, &str)> = vec![
                ("pname", name.as_str()),
                ("dur", &note.duration),
                ("oct", &octave),
            ];
            if let Some(accid) = note.accid_ges {
                attrs.push(("accid.ges", accid.mei_value()));
            }
            if let Some(DisplayedAccidental::Forced(accid)) = &note.display {
                attrs.push(("accid", accid.mei_value()));
            }
            if let Some(value) = slur {
                attrs.push(("slur", value));
            }
            attrs.push(("xml:id", &note.id));

            // A cautionary accidental is the only child a note can have.
            if let Some(DisplayedAccidental::Cautionary { id, value }) = &note.display {
                builder.open("note", &attrs);
                builder.empty(
                    "accid",
                    &[
                        ("func", "caution"),
                        ("accid", value.mei_value()),
                        ("xml:id", id),
                    ],
                );
                builder.close("note");
            } else {
                builder.empty("note", &attrs);
            }
        }
        PitchKind::Rest | PitchKind::MeasureRest | PitchKind::Space => {
            let tag = match note.pitch {
                PitchKind::Rest => "rest",
                PitchKind::MeasureRest => "mRest",
                _ => "space",
            };
            let mut attrs: Vec<(&str, &str)> = vec![("dur", &note.duration)];
            if let Some(value) = slur {
                attrs.push(("slur", value));
            }
            attrs.push(("xml:id", &note.id));
            builder.empty(tag, &attrs);
        }
    }
}

fn emit_slur(builder: &mut MeiBuilder, span: &SlurSpan) {
    let start = format!("#{}", span.start_id);
    let end = format!("#{}", span.end_id);
    let plist = span
        .participants
        .iter()
        .map(|id| format!("#{id}"))
        .collect::<Vec<_>>()
        .join(" ");
    builder.empty(
        "slur",
        &[
            ("startid", &start),
            ("endid", &end),
            ("plist", &plist),
            ("xml:id", &span.id),
        ],
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mei::ids::{IdAllocator, SequentialIdAllocator};
    use crate::mei::types::{Layer, Staff};
    use crate::models::{Accidental, NoteName, SlurRole};

    fn empty_document(ids: &mut dyn IdAllocator) -> MeiDocument {
        MeiDocument {
            section_id: ids.next_id(),
            score_id: ids.next_id(),
            body_id: ids.next_id(),
            music_id: ids.next_id(),
            id: ids.next_id(),
            measures: Vec::new(),
        }
    }

    #[test]
    fn test_empty_document_skeleton() {
        let mut ids = SequentialIdAllocator::new("d");
        let xml = emit_mei(&empty_document(&mut ids));
        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(xml.contains("<mei xmlns=\"http://www.music-encoding.org/ns/mei\" meiversion=\"2013\""));
        assert!(xml.contains("<section"));
        assert!(xml.contains("</mei>"));
    }

    #[test]
    fn test_note_attribute_order() {
        let mut ids = SequentialIdAllocator::new("d");
        let mut doc = empty_document(&mut ids);
        let note = NoteElement {
            id: "x1".to_string(),
            pitch: PitchKind::Letter(NoteName::F),
            accid_ges: Some(Accidental::Sharp),
            display: None,
            octave: 4,
            duration: "8".to_string(),
            slur: Some(SlurRole::Start),
        };
        doc.measures.push(MeasureElement {
            id: "x2".to_string(),
            number: Some(1),
            staff: Staff {
                id: "x3".to_string(),
                n: 1,
                layer: Layer {
                    id: "x4".to_string(),
                    n: 1,
                    events: vec![LayerEvent::Note(note)],
                },
            },
        });

        let xml = emit_mei(&doc);
        assert!(xml.contains(
            "<note pname=\"F\" dur=\"8\" oct=\"4\" accid.ges=\"s\" slur=\"i1\" xml:id=\"x1\"/>"
        ));
        assert!(xml.contains("<measure n=\"1\" xml:id=\"x2\">"));
    }
}
