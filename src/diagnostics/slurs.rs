//! Slur diagnostics - verifies slur spans against the notes they reference
//!
//! The assembler only emits a span once both of its endpoints are known,
//! so a healthy measure satisfies three rules: every span endpoint
//! resolves to a note in the same measure, the participant list runs
//! from the start note to the end note, and the number of spans agrees
//! with the number of notes marked as slur starts and ends. A start
//! left open at the end of a measure shows up as the last mismatch.

use std::collections::HashSet;

use crate::mei::types::{MeasureElement, MeiDocument};
use crate::models::SlurRole;

use super::{DiagnosticMark, DiagnosticSeverity};

/// Analyze the slurs of one measure
///
/// # Arguments
/// * `measure` - The assembled measure to analyze
/// * `measure_index` - Position in the document (for diagnostic location)
pub fn analyze_slurs(measure: &MeasureElement, measure_index: usize) -> Vec<DiagnosticMark> {
    let mut marks = Vec::new();

    let note_ids: HashSet<&str> = measure.notes().map(|n| n.id.as_str()).collect();

    for span in measure.slurs() {
        for endpoint in [&span.start_id, &span.end_id] {
            if !note_ids.contains(endpoint.as_str()) {
                marks.push(DiagnosticMark::new(
                    Some(measure_index),
                    DiagnosticSeverity::Error,
                    "slur_unresolved_ref",
                    format!("slur {:?} references missing note {endpoint:?}", span.id),
                ));
            }
        }

        let endpoints_match = span.participants.first() == Some(&span.start_id)
            && span.participants.last() == Some(&span.end_id);
        if !endpoints_match {
            marks.push(DiagnosticMark::new(
                Some(measure_index),
                DiagnosticSeverity::Error,
                "slur_plist_mismatch",
                format!(
                    "slur {:?} participant list does not run from start to end",
                    span.id
                ),
            ));
        }
    }

    let span_count = measure.slurs().count();
    let start_count = measure
        .notes()
        .filter(|n| n.slur == Some(SlurRole::Start))
        .count();
    let end_count = measure
        .notes()
        .filter(|n| n.slur == Some(SlurRole::End))
        .count();

    if start_count != span_count {
        marks.push(DiagnosticMark::new(
            Some(measure_index),
            DiagnosticSeverity::Error,
            "slur_dangling_start",
            format!(
                "{start_count} slur start(s) but {span_count} closed span(s); a slur is still open"
            ),
        ));
    }
    if end_count != span_count {
        marks.push(DiagnosticMark::new(
            Some(measure_index),
            DiagnosticSeverity::Error,
            "slur_dangling_end",
            format!("{end_count} slur end(s) but {span_count} closed span(s)"),
        ));
    }

    marks
}

/// Analyze slurs across all measures of a document
///
/// Measures are independent; a slur never crosses a measure boundary.
pub fn check_document_slurs(doc: &MeiDocument) -> Vec<DiagnosticMark> {
    let mut all_marks = Vec::new();
    for (index, measure) in doc.measures.iter().enumerate() {
        all_marks.extend(analyze_slurs(measure, index));
    }
    all_marks
}
