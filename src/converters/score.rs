//! Score conversion
//!
//! Splits the source text into measures on the bar character, assembles
//! each segment, and wraps the surviving measures in the fixed document
//! skeleton. This layer owns measure numbering: a measure is numbered by
//! its 1-based position among the bar-delimited segments, so a dropped
//! empty segment leaves a gap rather than renumbering its neighbors.

use crate::mei::ids::IdAllocator;
use crate::mei::types::MeiDocument;
use crate::models::Dialect;
use crate::parse::errors::ConversionError;
use crate::parse::measure::assemble_measure;

/// Convert a complete source text into an MEI document.
///
/// A trailing bar-check produces an empty final segment, which is
/// dropped like any other tokenless segment.
pub fn convert_score(
    source: &str,
    dialect: Dialect,
    ids: &mut dyn IdAllocator,
) -> Result<MeiDocument, ConversionError> {
    let mut measures = Vec::new();
    for (i, segment) in source.split('|').enumerate() {
        if let Some(mut measure) = assemble_measure(segment, dialect, ids)? {
            measure.number = Some(i as u32 + 1);
            measures.push(measure);
        }
    }
    log::debug!("assembled {} measures", measures.len());

    let doc = MeiDocument {
        section_id: ids.next_id(),
        score_id: ids.next_id(),
        body_id: ids.next_id(),
        music_id: ids.next_id(),
        id: ids.next_id(),
        measures,
    };

    if log::log_enabled!(log::Level::Trace) {
        if let Ok(json) = serde_json::to_string(&doc) {
            log::trace!("document model: {json}");
        }
    }

    Ok(doc)
}
