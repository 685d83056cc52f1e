//! Diagnostics for assembled documents
//!
//! Consistency checks that run after conversion, before serialization.
//! Slur integrity is the first customer, but the mark type is generic so
//! other checks (identifier uniqueness, future structural rules) share
//! the same reporting path.

pub mod slurs;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::mei::types::MeiDocument;

/// Severity level for diagnostic marks
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticSeverity {
    Error,
    Warning,
    Info,
}

/// A diagnostic mark pointing at an issue in the assembled document
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct DiagnosticMark {
    /// Index of the affected measure, or `None` for document-level marks
    pub measure: Option<usize>,
    /// Severity level
    pub severity: DiagnosticSeverity,
    /// Kind identifier (e.g. "slur_unresolved_ref", "duplicate_id")
    pub kind: String,
    /// Human-readable message
    pub message: String,
}

impl DiagnosticMark {
    /// Create a new diagnostic mark
    pub fn new(
        measure: Option<usize>,
        severity: DiagnosticSeverity,
        kind: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            measure,
            severity,
            kind: kind.into(),
            message: message.into(),
        }
    }
}

/// Collection of diagnostic marks for one document
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Diagnostics {
    /// All diagnostic marks
    pub marks: Vec<DiagnosticMark>,
}

impl Diagnostics {
    /// Create empty diagnostics
    pub fn new() -> Self {
        Self { marks: Vec::new() }
    }

    /// Add a mark
    pub fn add(&mut self, mark: DiagnosticMark) {
        self.marks.push(mark);
    }

    /// Extend with multiple marks
    pub fn extend(&mut self, marks: impl IntoIterator<Item = DiagnosticMark>) {
        self.marks.extend(marks);
    }

    /// Check if there are any errors
    pub fn has_errors(&self) -> bool {
        self.marks
            .iter()
            .any(|m| m.severity == DiagnosticSeverity::Error)
    }

    /// Check if there are any diagnostics
    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }
}

/// Run every document check: identifier uniqueness plus slur integrity.
pub fn check_document(doc: &MeiDocument) -> Diagnostics {
    let mut diagnostics = Diagnostics::new();
    diagnostics.extend(check_id_uniqueness(doc));
    diagnostics.extend(slurs::check_document_slurs(doc));
    diagnostics
}

/// No two elements anywhere in the document may share an xml:id.
fn check_id_uniqueness(doc: &MeiDocument) -> Vec<DiagnosticMark> {
    let mut seen = HashSet::new();
    let mut marks = Vec::new();
    for id in doc.element_ids() {
        if !seen.insert(id) {
            marks.push(DiagnosticMark::new(
                None,
                DiagnosticSeverity::Error,
                "duplicate_id",
                format!("xml:id {id:?} is used by more than one element"),
            ));
        }
    }
    marks
}
